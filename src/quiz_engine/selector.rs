//! Spin draw, sector mapping and wildcard resolution.
//!
//! The pointer sits fixed above the wheel between the last sector and
//! sector 0, so a clockwise rotation of `r` degrees brings sector
//! `floor((360 - r mod 360) / (360 / N)) mod N` under it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::{
    catalog::Catalog,
    config::WheelConfig,
    error::{ConfigError, ResolveError},
    models::{Sector, SectorRole, SelectionOutcome, Spin, TopicOutcome},
};

/// Sector under the pointer for a total rotation of `rotation` degrees.
///
/// Dividing by `360 / N` is done as `* N / 360` so uneven section angles
/// stay exact. An empty wheel maps everything to 0.
pub fn sector_index(rotation: u64, sector_count: usize) -> usize {
    if sector_count == 0 {
        return 0;
    }
    let n = sector_count as u64;
    let normalized = rotation % 360;
    ((360 - normalized) * n / 360 % n) as usize
}

#[derive(Debug, Clone)]
pub struct Selector {
    sectors: Vec<Sector>,
    min_spins: u32,
    max_spins: u32,
    resting_rotation: u64,
}

impl Selector {
    pub fn new(wheel: &WheelConfig) -> Result<Self, ConfigError> {
        wheel.validate()?;
        Ok(Selector {
            sectors: wheel.sectors.clone(),
            min_spins: wheel.min_spins,
            max_spins: wheel.max_spins,
            resting_rotation: 0,
        })
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Rotation the wheel rests at after the last spin.
    pub fn resting_rotation(&self) -> u64 {
        self.resting_rotation
    }

    pub fn sector_of(&self, rotation: u64) -> usize {
        sector_index(rotation, self.sectors.len())
    }

    /// Draw turns and extra degrees, and advance the resting rotation.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Spin {
        let turns = rng.gen_range(self.min_spins..=self.max_spins);
        let extra_degrees = rng.gen_range(0..360u32);
        let rotation = self.resting_rotation + u64::from(turns) * 360 + u64::from(extra_degrees);
        self.resting_rotation = rotation;
        Spin { turns, extra_degrees, rotation }
    }

    /// Turn the landed sector into a topic outcome.
    pub fn resolve<R: Rng>(
        &self,
        sector_index: usize,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<TopicOutcome, ResolveError> {
        let sector = &self.sectors[sector_index % self.sectors.len()];
        match sector.role {
            SectorRole::Normal => Ok(TopicOutcome::Topic(sector.topic.clone())),
            SectorRole::Respin => Ok(TopicOutcome::Respin),
            SectorRole::Random => {
                let eligible = self.eligible_topics(catalog);
                eligible
                    .choose(rng)
                    .map(|t| TopicOutcome::Random(t.to_string()))
                    .ok_or(ResolveError::NoEligibleTopic)
            }
        }
    }

    /// Topics the random wildcard may land on: every catalog topic with at
    /// least one question that no wildcard sector names.
    pub fn eligible_topics<'c>(&self, catalog: &'c Catalog) -> Vec<&'c str> {
        catalog
            .non_empty_topics()
            .filter(|topic| {
                !self
                    .sectors
                    .iter()
                    .any(|s| s.role.is_wildcard() && s.topic == *topic)
            })
            .collect()
    }

    /// Draw a spin and resolve it in one step.
    pub fn spin<R: Rng>(
        &mut self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<SelectionOutcome, ResolveError> {
        let spin = self.draw(rng);
        let sector_index = self.sector_of(spin.rotation);
        let role = self.sectors[sector_index].role;
        let outcome = self.resolve(sector_index, catalog, rng)?;
        Ok(SelectionOutcome { spin, sector_index, role, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"{
                "ma conso": [ { "id": 1, "question": "Q", "options": ["a"], "correctAnswer": 0, "explanation": "" } ],
                "bon plan": [ { "id": 2, "question": "Q", "options": ["a"], "correctAnswer": 0, "explanation": "" } ],
                "j'agis !!": [],
                "et ça repart !": [],
                "mystère !!": []
            }"#,
        )
        .unwrap()
    }

    fn selector() -> Selector {
        Selector::new(&WheelConfig::default()).unwrap()
    }

    #[test]
    fn reference_wheel_mapping() {
        // 45° sections; zero rotation lands on sector 0.
        assert_eq!(sector_index(0, 8), 0);
        assert_eq!(sector_index(1, 8), 7);
        assert_eq!(sector_index(45, 8), 7);
        assert_eq!(sector_index(46, 8), 6);
        assert_eq!(sector_index(90, 8), 6);
        assert_eq!(sector_index(180, 8), 4);
        assert_eq!(sector_index(315, 8), 1);
        assert_eq!(sector_index(316, 8), 0);
        assert_eq!(sector_index(359, 8), 0);
    }

    #[test]
    fn uneven_sector_count_stays_in_range() {
        for r in 0..720 {
            assert!(sector_index(r, 7) < 7);
        }
        assert_eq!(sector_index(0, 7), 0);
    }

    #[test]
    fn empty_wheel_maps_to_zero() {
        assert_eq!(sector_index(0, 0), 0);
        assert_eq!(sector_index(1234, 0), 0);
    }

    proptest! {
        #[test]
        fn mapping_is_periodic(r in 0u64..10_000_000, n in 1usize..16) {
            prop_assert_eq!(sector_index(r, n), sector_index(r + 360, n));
            prop_assert_eq!(sector_index(r, n), sector_index(r, n));
            prop_assert!(sector_index(r, n) < n);
        }
    }

    #[test]
    fn spin_draws_stay_in_range() {
        let mut selector = selector();
        let mut rng = StdRng::seed_from_u64(42);
        let mut last = 0;
        for _ in 0..10_000 {
            let spin = selector.draw(&mut rng);
            assert!((5..=8).contains(&spin.turns), "turns out of range: {}", spin.turns);
            assert!(spin.extra_degrees < 360, "extra out of range: {}", spin.extra_degrees);
            assert!(spin.rotation >= last, "rotation went backwards");
            assert_eq!(spin.rotation - last, u64::from(spin.turns) * 360 + u64::from(spin.extra_degrees));
            last = spin.rotation;
        }
        assert_eq!(selector.resting_rotation(), last);
    }

    #[test]
    fn normal_sector_resolves_to_itself() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = selector().resolve(1, &catalog(), &mut rng).unwrap();
        assert_eq!(outcome, TopicOutcome::Topic("bon plan".into()));
    }

    #[test]
    fn respin_sector_resolves_to_respin() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(selector().resolve(2, &catalog(), &mut rng).unwrap(), TopicOutcome::Respin);
        assert_eq!(selector().resolve(7, &catalog(), &mut rng).unwrap(), TopicOutcome::Respin);
    }

    #[test]
    fn random_sector_only_lands_on_non_empty_normal_topics() {
        let selector = selector();
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            match selector.resolve(4, &catalog, &mut rng).unwrap() {
                TopicOutcome::Random(t) => {
                    assert!(t == "ma conso" || t == "bon plan", "ineligible topic {t}");
                    seen.insert(t);
                }
                other => panic!("expected Random, got {other:?}"),
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn random_sector_fails_without_eligible_topic() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = selector().resolve(4, &Catalog::default(), &mut rng).unwrap_err();
        assert_eq!(err, ResolveError::NoEligibleTopic);
    }

    #[test]
    fn eligible_topics_exclude_wildcard_names() {
        let catalog = Catalog::from_json_str(
            r#"{
                "et ça repart !": [ { "id": 1, "question": "Q", "options": [], "explanation": "" } ],
                "on en parle !?": [ { "id": 2, "question": "Q", "options": [], "explanation": "" } ]
            }"#,
        )
        .unwrap();
        assert_eq!(selector().eligible_topics(&catalog), vec!["on en parle !?"]);
    }

    #[test]
    fn spin_records_consistent_outcome() {
        let mut selector = selector();
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..100 {
            let sel = selector.spin(&catalog, &mut rng).unwrap();
            assert_eq!(sel.sector_index, selector.sector_of(sel.spin.rotation));
            assert_eq!(sel.role, selector.sectors()[sel.sector_index].role);
            match sel.role {
                SectorRole::Respin => assert_eq!(sel.outcome, TopicOutcome::Respin),
                SectorRole::Random => assert!(sel.outcome.via_random()),
                SectorRole::Normal => assert_eq!(
                    sel.outcome.topic(),
                    Some(selector.sectors()[sel.sector_index].topic.as_str())
                ),
            }
        }
    }

    #[test]
    fn rejects_invalid_wheel() {
        let wheel = WheelConfig { sectors: vec![], ..WheelConfig::default() };
        assert!(matches!(Selector::new(&wheel), Err(ConfigError::NoSectors)));
    }
}
