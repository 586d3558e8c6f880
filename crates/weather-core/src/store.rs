//! In-memory weather store using DashMap
//!
//! Entries are keyed by [`CityKey`] and hold the latest [`Observation`] in
//! Kelvin. The map is sharded with one read/write lock per shard; a report
//! replaces the whole observation under its shard's write lock, so readers
//! never see a half-written entry and the last writer to take the lock wins.

use crate::convert::{convert, from_kelvin, to_kelvin};
use crate::error::{Result, WeatherError};
use crate::ports::{Clock, SystemClock, WeatherService};
use crate::types::{CityKey, Observation, Unit};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct WeatherStore {
    data: DashMap<CityKey, Observation>,
    clock: Arc<dyn Clock>,
}

impl WeatherStore {
    /// Create an empty store stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            data: DashMap::new(),
            clock,
        }
    }

    /// Store a reading for `city`, replacing any earlier one.
    ///
    /// Fails with [`WeatherError::InvalidTemperature`] when the reading is
    /// below absolute zero, or not finite in every unit it can be read back
    /// in; nothing is written in that case.
    pub fn report(&self, city: &str, temperature: f64, unit: Unit) -> Result<i64> {
        let key = CityKey::normalize(city);
        let kelvin = to_kelvin(temperature, unit);
        let readable = Unit::ALL
            .iter()
            .all(|u| from_kelvin(kelvin, *u).is_finite());
        if !readable || kelvin < 0.0 {
            warn!(
                "Rejected report for '{}': {} {} is out of range",
                key, temperature, unit
            );
            return Err(WeatherError::InvalidTemperature {
                value: temperature,
                unit,
            });
        }

        let timestamp = self.clock.now_unix();
        debug!("Storing {} K for '{}' at {}", kelvin, key, timestamp);
        self.data.insert(key, Observation::new(kelvin, timestamp));

        Ok(timestamp)
    }

    /// Latest reading for `city` converted to `unit`. The timestamp is the one stored.
    pub fn temperature_in(&self, city: &str, unit: Unit) -> Result<Observation> {
        let key = CityKey::normalize(city);
        let stored = self
            .data
            .get(&key)
            .map(|entry| *entry.value())
            .ok_or_else(|| WeatherError::NotFound(key.into_string()))?;

        Ok(Observation::new(
            convert(stored.temperature, Unit::Kelvin, unit),
            stored.timestamp,
        ))
    }

    pub fn cities(&self) -> Vec<String> {
        self.data
            .iter()
            .map(|entry| entry.key().as_str().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for WeatherStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherService for WeatherStore {
    fn report(&self, city: &str, temperature: f64, unit: Unit) -> Result<i64> {
        WeatherStore::report(self, city, temperature, unit)
    }

    fn temperature_in(&self, city: &str, unit: Unit) -> Result<Observation> {
        WeatherStore::temperature_in(self, city, unit)
    }

    fn cities(&self) -> Vec<String> {
        WeatherStore::cities(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use std::collections::HashSet;
    use std::sync::Barrier;
    use std::thread;

    const EPSILON: f64 = 1e-5;
    const NOW: i64 = 1_700_000_000;

    fn store() -> (WeatherStore, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(NOW));
        (WeatherStore::with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = WeatherStore::new();
        assert!(store.is_empty());
        assert!(store.cities().is_empty());
    }

    #[test]
    fn test_report_then_query() {
        let (store, _) = store();

        let ts = store.report("Munich", 21.0, Unit::Celsius).unwrap();
        assert_eq!(ts, NOW);

        let celsius = store.temperature_in("munich", Unit::Celsius).unwrap();
        assert!((celsius.temperature - 21.0).abs() < EPSILON);
        assert_eq!(celsius.timestamp, NOW);

        let kelvin = store.temperature_in("MUNICH", Unit::Kelvin).unwrap();
        assert!((kelvin.temperature - 294.15).abs() < EPSILON);
        assert_eq!(kelvin.timestamp, NOW);

        let fahrenheit = store.temperature_in("Mu nich", Unit::Fahrenheit).unwrap();
        assert!((fahrenheit.temperature - 69.8).abs() < EPSILON);
    }

    #[test]
    fn test_unknown_city_not_found() {
        let (store, _) = store();
        store.report("Berlin", 10.0, Unit::Celsius).unwrap();

        for unit in Unit::ALL {
            assert_eq!(
                store.temperature_in("Paris", unit),
                Err(WeatherError::NotFound("paris".to_string()))
            );
        }
    }

    #[test]
    fn test_report_overwrites() {
        let (store, clock) = store();
        store.report("Berlin", 10.0, Unit::Celsius).unwrap();

        clock.advance(60);
        let ts = store.report("BER LIN", 50.0, Unit::Fahrenheit).unwrap();
        assert_eq!(ts, NOW + 60);

        let obs = store.temperature_in("berlin", Unit::Fahrenheit).unwrap();
        assert!((obs.temperature - 50.0).abs() < EPSILON);
        assert_eq!(obs.timestamp, NOW + 60);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_below_absolute_zero_rejected() {
        let (store, clock) = store();
        store.report("Munich", 21.0, Unit::Celsius).unwrap();
        clock.advance(10);

        let err = store.report("Munich", -400.0, Unit::Celsius).unwrap_err();
        assert_eq!(
            err,
            WeatherError::InvalidTemperature {
                value: -400.0,
                unit: Unit::Celsius
            }
        );

        let obs = store.temperature_in("munich", Unit::Celsius).unwrap();
        assert!((obs.temperature - 21.0).abs() < EPSILON);
        assert_eq!(obs.timestamp, NOW);
    }

    #[test]
    fn test_rejected_report_creates_no_entry() {
        let (store, _) = store();
        assert!(store.report("Oslo", -1.0, Unit::Kelvin).is_err());
        assert!(store.report("Oslo", -460.0, Unit::Fahrenheit).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_absolute_zero_accepted() {
        let (store, _) = store();
        store.report("Void", 0.0, Unit::Kelvin).unwrap();
        store.report("Cold", -273.15, Unit::Celsius).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_non_finite_rejected() {
        let (store, _) = store();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            for unit in Unit::ALL {
                assert!(matches!(
                    store.report("Nowhere", value, unit),
                    Err(WeatherError::InvalidTemperature { .. })
                ));
            }
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_value_overflowing_another_unit_rejected() {
        let (store, _) = store();
        assert!(matches!(
            store.report("Sun", 1e308, Unit::Kelvin),
            Err(WeatherError::InvalidTemperature { .. })
        ));
        assert!(store.is_empty());

        store.report("Sun", 1e300, Unit::Kelvin).unwrap();
        for unit in Unit::ALL {
            let obs = store.temperature_in("sun", unit).unwrap();
            assert!(obs.temperature.is_finite());
        }
    }

    #[test]
    fn test_empty_key_is_stored() {
        let (store, _) = store();
        store.report("1234", 5.0, Unit::Celsius).unwrap();
        assert_eq!(store.cities(), vec![String::new()]);
        assert!(store.temperature_in("!!", Unit::Celsius).is_ok());
    }

    #[test]
    fn test_cities() {
        let (store, _) = store();
        for city in ["munich", "Berlin", "SEATTLE", "ber lin"] {
            store.report(city, 1.0, Unit::Celsius).unwrap();
        }

        let mut cities = store.cities();
        cities.sort();
        assert_eq!(cities, vec!["berlin", "munich", "seattle"]);
    }

    #[test]
    fn test_service_trait_object() {
        let (store, _) = store();
        let service: Arc<dyn WeatherService> = Arc::new(store);

        service.report("Seattle", 50.0, Unit::Fahrenheit).unwrap();
        let obs = service.temperature_in("seattle", Unit::Celsius).unwrap();
        assert!((obs.temperature - 10.0).abs() < EPSILON);
        assert_eq!(service.cities(), vec!["seattle".to_string()]);
    }

    #[test]
    fn test_concurrent_writers_leave_one_write() {
        const WRITERS: usize = 16;
        let store = Arc::new(WeatherStore::new());
        let barrier = Arc::new(Barrier::new(WRITERS));

        let handles: Vec<_> = (0..WRITERS)
            .map(|i| {
                let store = store.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..100 {
                        store.report("Munich", i as f64, Unit::Kelvin).unwrap();
                        store.temperature_in("munich", Unit::Kelvin).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let written: HashSet<u64> = (0..WRITERS).map(|i| (i as f64).to_bits()).collect();
        let obs = store.temperature_in("munich", Unit::Kelvin).unwrap();
        assert!(written.contains(&obs.temperature.to_bits()));
        assert_eq!(store.cities(), vec!["munich".to_string()]);
    }

    #[test]
    fn test_concurrent_cities_distinct() {
        let store = Arc::new(WeatherStore::new());
        let names = ["munich", "berlin", "seattle"];

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    let city = names[i % names.len()];
                    store.report(city, 280.0, Unit::Kelvin).unwrap();
                    store.cities().len()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap() <= names.len());
        }

        let cities: HashSet<String> = store.cities().into_iter().collect();
        assert_eq!(cities.len(), 3);
        assert_eq!(store.len(), 3);
    }
}
