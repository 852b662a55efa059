use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use td_calculators::CalculationDefaults;
use td_configurator::DateTypeConfigurator;
use td_core::{AttributeMap, Fact, FactList, CALCULATED_DATES};
use td_time::InMemoryCalendars;

fn bank_holidays() -> Vec<NaiveDate> {
    [
        (2022, 1, 3),
        (2022, 4, 15),
        (2022, 4, 18),
        (2022, 5, 2),
        (2022, 6, 2),
        (2022, 6, 3),
        (2022, 8, 29),
        (2022, 9, 19),
        (2022, 12, 26),
        (2022, 12, 27),
    ]
    .into_iter()
    .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    .collect()
}

fn facts() -> FactList {
    let mut facts = vec![
        Fact::new(
            CALCULATED_DATES,
            "nextHearingDuration,nextHearingDate,dueDate,priorityDate",
        ),
        Fact::new("nextHearingDurationOrigin", "2022-10-13T09:00"),
        Fact::new("nextHearingDurationIntervalDays", "10"),
        Fact::new("nextHearingDateOriginRef", "nextHearingDuration"),
        Fact::new("nextHearingDateMustBeWorkingDay", "Next"),
        Fact::new("dueDateOriginLatest", "nextHearingDate,nextHearingDuration"),
        Fact::new("dueDateIntervalDays", "60"),
        Fact::new("priorityDateOriginEarliest", "dueDate,nextHearingDate"),
        Fact::new("priorityDateIntervalDays", "-5"),
        Fact::new("priorityDateTime", "10:30"),
    ];
    for prefix in ["nextHearingDuration", "nextHearingDate", "dueDate", "priorityDate"] {
        facts.push(Fact::new(format!("{prefix}NonWorkingCalendar"), "england-and-wales"));
        facts.push(Fact::new(format!("{prefix}NonWorkingDaysOfWeek"), "SATURDAY,SUNDAY"));
    }
    FactList::from(facts)
}

fn bench_configure_dates(c: &mut Criterion) {
    let calendars = InMemoryCalendars::new().with_calendar("england-and-wales", bank_holidays());
    let default_date = NaiveDate::from_ymd_opt(2022, 10, 13).unwrap_or_default();
    let configurator = DateTypeConfigurator::new(Arc::new(calendars))
        .with_defaults(CalculationDefaults::default().with_default_date(default_date));
    let facts = facts();

    c.bench_function("configure_dates/four_dates", |b| {
        b.iter(|| {
            let mut attributes = AttributeMap::new();
            let out = configurator
                .configure_dates(black_box(&facts), false, false, &mut attributes)
                .map(|facts| facts.len())
                .unwrap_or_default();
            black_box((out, attributes))
        })
    });
}

criterion_group!(benches, bench_configure_dates);
criterion_main!(benches);
