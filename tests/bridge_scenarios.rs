use temporal_bridge::{
    dispatch::{Dispatcher, EntryPoint, Value},
    exports,
    BridgeIterator, EnumerationCategory, ErrorKind, Formatter, IteratorArena, IteratorState,
    PlainDate, PlainTime, TemporalField, UtcOffset,
};

fn drain(iterator: &mut BridgeIterator) -> Vec<String> {
    let mut out = Vec::new();
    while iterator.has_next() {
        out.push(iterator.next().unwrap());
    }
    out
}

/// A region such as `Europe/Paris`, `UTC`, or a fixed offset.
fn is_region_utc_or_fixed_offset(id: &str) -> bool {
    id.contains('/') || id == "UTC" || id.parse::<UtcOffset>().is_ok()
}

#[test]
fn drain_fixed_provider() {
    let ids = ["UTC", "Europe/Paris", "America/New_York"];
    let mut zones =
        BridgeIterator::create_with_provider(EnumerationCategory::AvailableZoneIds, &ids[..])
            .unwrap();
    assert_eq!(zones.state(), IteratorState::Created);
    assert_eq!(drain(&mut zones), ids);
    assert_eq!(zones.state(), IteratorState::Exhausted);

    let err = zones.next().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExhaustedIterator);
    // Still exhausted on a second attempt.
    assert_eq!(zones.next().unwrap_err().kind(), ErrorKind::ExhaustedIterator);
}

#[test]
fn empty_provider_is_unavailable() {
    let ids: [&str; 0] = [];
    let err = BridgeIterator::create_with_provider(EnumerationCategory::AvailableZoneIds, &ids[..])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EnumerationUnavailable);
}

#[cfg(feature = "compiled_data")]
#[test]
fn drain_available_zone_ids() {
    let mut zones = exports::new_available_zone_ids_iterator().unwrap();
    let expected = zones.len();
    let ids = drain(&mut zones);
    assert_eq!(ids.len(), expected);
    for id in &ids {
        assert!(is_region_utc_or_fixed_offset(id), "{id:?}");
    }
    assert!(ids.iter().any(|id| id == "America/New_York"));
    assert!(!ids.iter().any(|id| id == "Cuba" || id == "EST5EDT"));
    assert_eq!(zones.next().unwrap_err().kind(), ErrorKind::ExhaustedIterator);
}

#[cfg(feature = "compiled_data")]
#[test]
fn independent_iterators_yield_the_same_set() {
    use std::collections::BTreeSet;

    let mut arena = IteratorArena::new();
    let first = arena.create(EnumerationCategory::AvailableZoneIds).unwrap();
    let second = arena.create(EnumerationCategory::AvailableZoneIds).unwrap();
    assert_ne!(first, second);

    // Interleave the two handles.
    let mut a = BTreeSet::new();
    let mut b = BTreeSet::new();
    while arena.has_next(first).unwrap() {
        a.insert(arena.next(first).unwrap());
        if arena.has_next(second).unwrap() {
            b.insert(arena.next(second).unwrap());
        }
    }
    while arena.has_next(second).unwrap() {
        b.insert(arena.next(second).unwrap());
    }
    assert_eq!(a, b);

    arena.release(first).unwrap();
    assert_eq!(arena.has_next(first).unwrap_err().kind(), ErrorKind::InvalidHandle);
    assert_eq!(arena.release(first).unwrap_err().kind(), ErrorKind::InvalidHandle);
    assert_eq!(arena.next(second).unwrap_err().kind(), ErrorKind::ExhaustedIterator);

    // Handles are not reused.
    let third = arena.create(EnumerationCategory::AvailableLocales).unwrap();
    assert_ne!(third, first);
    assert_ne!(third, second);
}

#[cfg(feature = "std")]
#[test]
fn snapshot_ignores_later_provider_changes() {
    use std::cell::RefCell;
    use temporal_bridge::provider::ZoneIdProvider;

    struct Growing(RefCell<Vec<String>>);

    impl ZoneIdProvider for Growing {
        fn available_zone_ids(&self) -> temporal_bridge::BridgeResult<Vec<String>> {
            let ids = self.0.borrow().clone();
            self.0.borrow_mut().push(String::from("Etc/Extra"));
            Ok(ids)
        }
    }

    let provider = Growing(RefCell::new(vec![String::from("UTC")]));
    let mut zones =
        BridgeIterator::create_with_provider(EnumerationCategory::AvailableZoneIds, &provider)
            .unwrap();
    assert_eq!(provider.0.borrow().len(), 2);
    assert_eq!(drain(&mut zones), ["UTC"]);
}

#[test]
fn parse_scenarios() {
    let date = exports::local_date_parse("2020-01-15").unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2020, 1, 15));

    let date_time = exports::local_date_time_parse("2020-01-15T10:30:00+01:00").unwrap();
    assert_eq!(date_time.to_string(), "2020-01-15T10:30");

    let err = exports::local_date_parse("not-a-date").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);

    let formatter = Formatter::pattern("%d/%m/%Y").unwrap();
    let date = exports::local_date_parse_with_formatter("15/01/2020", &formatter).unwrap();
    assert_eq!(date.to_string(), "2020-01-15");
    assert_eq!(formatter.format_date(&date).unwrap(), "15/01/2020");
}

#[test]
fn range_scenarios() {
    let date = exports::local_date_parse("2020-01-15").unwrap();
    let range = exports::local_date_range(&date, TemporalField::DayOfMonth).unwrap();
    assert!(range.is_valid_value(31));
    assert!(!range.is_valid_value(32));
    assert_eq!(range.to_string(), "1 - 31");

    let instant = exports::instant_parse("2020-01-15T10:30:00Z").unwrap();
    let err = exports::instant_range(&instant, TemporalField::DayOfMonth).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedField);
}

#[test]
fn dispatch_by_name() {
    for entry in EntryPoint::ALL {
        assert_eq!(EntryPoint::from_name(entry.name()), Some(entry));
    }
    let entry = EntryPoint::from_name("eraGetDisplayName").unwrap();
    let name = entry
        .invoke(&[
            Value::Era(temporal_bridge::Era::Ce),
            Value::TextStyle(temporal_bridge::TextStyle::Full),
            Value::Locale("en".parse().unwrap()),
        ])
        .unwrap();
    assert!(matches!(name, Value::Text(ref text) if text == "Anno Domini"));

    let err = entry.invoke(&[Value::from("en")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[cfg(feature = "compiled_data")]
#[test]
fn dispatcher_drains_zone_ids_through_handles() {
    let mut dispatcher = Dispatcher::new();
    let handle = dispatcher
        .invoke_by_name("newAvailableZoneIdsIterator", &[])
        .unwrap();
    let Value::Handle(raw) = handle else {
        panic!("expected a handle, got {handle:?}");
    };
    let expected = dispatcher.arena().get(raw).unwrap().len();

    let mut ids = Vec::new();
    while let Value::Bool(true) = dispatcher
        .invoke(EntryPoint::IteratorHasNext, &[Value::Handle(raw)])
        .unwrap()
    {
        match dispatcher.invoke(EntryPoint::IteratorNext, &[Value::Handle(raw)]) {
            Ok(Value::Text(id)) => ids.push(id),
            other => panic!("expected a zone identifier, got {other:?}"),
        }
    }
    assert_eq!(ids.len(), expected);
    assert!(ids.iter().all(|id| is_region_utc_or_fixed_offset(id)));

    dispatcher
        .invoke(EntryPoint::IteratorRelease, &[Value::Handle(raw)])
        .unwrap();
    let err = dispatcher
        .invoke(EntryPoint::IteratorNext, &[Value::Handle(raw)])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidHandle);
}

#[test]
fn canonical_strings_parse_back() {
    let first = PlainDate::MIN.to_epoch_days();
    let last = PlainDate::MAX.to_epoch_days();
    let mut days: Vec<i64> = (first..=last).step_by(9_973).collect();
    days.extend([first, -1, 0, 1, last]);

    let times = [
        PlainTime::MIDNIGHT,
        PlainTime::try_new(0, 0, 1, 0).unwrap(),
        PlainTime::try_new(9, 5, 0, 0).unwrap(),
        PlainTime::try_new(12, 30, 45, 500_000_000).unwrap(),
        PlainTime::try_new(18, 0, 59, 120_000).unwrap(),
        PlainTime::try_new(23, 59, 59, 999_999_999).unwrap(),
    ];
    let offsets = [0, 3_600, -18_000, 19_800, -34_215, 64_800, -64_800]
        .map(|seconds| UtcOffset::from_seconds(seconds).unwrap());

    for time in times {
        assert_eq!(exports::local_time_parse(&time.to_string()).unwrap(), time);
    }

    for (i, &day) in days.iter().enumerate() {
        let date = PlainDate::from_epoch_days(day).unwrap();
        let text = date.to_string();
        assert_eq!(exports::local_date_parse(&text).unwrap(), date, "{text}");

        let date_time = date.at(times[i % times.len()]);
        let text = date_time.to_string();
        assert_eq!(exports::local_date_time_parse(&text).unwrap(), date_time, "{text}");

        let offset_date_time = date_time.with_offset(offsets[i % offsets.len()]);
        let text = offset_date_time.to_string();
        assert_eq!(
            exports::offset_date_time_parse(&text).unwrap(),
            offset_date_time,
            "{text}"
        );

        // Local date-times at the edges of the calendar may denote an
        // instant outside of the supported range.
        if let Ok(instant) = offset_date_time.to_instant() {
            let text = instant.to_string();
            assert_eq!(exports::instant_parse(&text).unwrap(), instant, "{text}");
        }
    }
}
