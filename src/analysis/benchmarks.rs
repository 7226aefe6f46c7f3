//! Static reference tables: per-tier baseline averages for the category
//! scorer, and the flat mean/std-dev benchmark set for the tag classifier.

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

use super::zscore::Benchmark;

/// Ranked skill bracket used to select a comparison baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    pub fn baseline(self) -> &'static TierBaseline {
        match self {
            Tier::Iron => &IRON,
            Tier::Bronze => &BRONZE,
            Tier::Silver => &SILVER,
            Tier::Gold => &GOLD,
            Tier::Platinum => &PLATINUM,
            Tier::Emerald => &EMERALD,
            Tier::Diamond => &DIAMOND,
            Tier::Master => &MASTER,
            Tier::Grandmaster => &GRANDMASTER,
            Tier::Challenger => &CHALLENGER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = AppError;

    /// Case-insensitive. An unrecognized name is a caller error and fails
    /// fast instead of substituting a default.
    fn from_str(s: &str) -> Result<Self, AppError> {
        match s.to_ascii_uppercase().as_str() {
            "IRON" => Ok(Tier::Iron),
            "BRONZE" => Ok(Tier::Bronze),
            "SILVER" => Ok(Tier::Silver),
            "GOLD" => Ok(Tier::Gold),
            "PLATINUM" => Ok(Tier::Platinum),
            "EMERALD" => Ok(Tier::Emerald),
            "DIAMOND" => Ok(Tier::Diamond),
            "MASTER" => Ok(Tier::Master),
            "GRANDMASTER" => Ok(Tier::Grandmaster),
            "CHALLENGER" => Ok(Tier::Challenger),
            _ => Err(AppError::UnknownTier(s.to_string())),
        }
    }
}

/// Average per-game stats for one tier. Reference values, fixed at build
/// time; never mutated or recomputed.
#[derive(Debug, Clone, Copy)]
pub struct TierBaseline {
    pub cs: f64,
    pub dpm: f64,
    pub vis: f64,
    pub kp: f64,
    pub solo: f64,
    pub deaths: f64,
    pub gold_per_min: f64,
    pub plates: f64,
    pub wards_placed: f64,
    pub wards_destroyed: f64,
    pub control_wards: f64,
    pub dragon_takedowns: f64,
    pub objective_dmg_per_min: f64,
    pub turret_dmg: f64,
    pub cc_per_game: f64,
    pub damage_share: f64,
    pub multikills: f64,
    pub first_blood_rate: f64,
}

const IRON: TierBaseline = TierBaseline { cs: 4.5, dpm: 350.0, vis: 0.4, kp: 0.35, solo: 0.5, deaths: 7.5, gold_per_min: 280.0, plates: 0.3, wards_placed: 4.0, wards_destroyed: 0.5, control_wards: 0.3, dragon_takedowns: 0.3, objective_dmg_per_min: 150.0, turret_dmg: 2000.0, cc_per_game: 15.0, damage_share: 0.20, multikills: 0.2, first_blood_rate: 0.10 };
const BRONZE: TierBaseline = TierBaseline { cs: 5.0, dpm: 400.0, vis: 0.6, kp: 0.40, solo: 0.8, deaths: 7.0, gold_per_min: 310.0, plates: 0.5, wards_placed: 5.0, wards_destroyed: 1.0, control_wards: 0.5, dragon_takedowns: 0.5, objective_dmg_per_min: 180.0, turret_dmg: 2500.0, cc_per_game: 18.0, damage_share: 0.20, multikills: 0.3, first_blood_rate: 0.12 };
const SILVER: TierBaseline = TierBaseline { cs: 5.5, dpm: 480.0, vis: 0.8, kp: 0.42, solo: 1.0, deaths: 6.5, gold_per_min: 340.0, plates: 0.7, wards_placed: 6.0, wards_destroyed: 1.5, control_wards: 0.8, dragon_takedowns: 0.6, objective_dmg_per_min: 210.0, turret_dmg: 3000.0, cc_per_game: 22.0, damage_share: 0.20, multikills: 0.4, first_blood_rate: 0.13 };
const GOLD: TierBaseline = TierBaseline { cs: 6.0, dpm: 550.0, vis: 1.0, kp: 0.45, solo: 1.2, deaths: 6.0, gold_per_min: 370.0, plates: 1.0, wards_placed: 7.0, wards_destroyed: 2.0, control_wards: 1.0, dragon_takedowns: 0.8, objective_dmg_per_min: 240.0, turret_dmg: 3500.0, cc_per_game: 25.0, damage_share: 0.20, multikills: 0.5, first_blood_rate: 0.14 };
const PLATINUM: TierBaseline = TierBaseline { cs: 6.5, dpm: 620.0, vis: 1.2, kp: 0.48, solo: 1.5, deaths: 5.5, gold_per_min: 400.0, plates: 1.3, wards_placed: 8.0, wards_destroyed: 2.5, control_wards: 1.3, dragon_takedowns: 0.9, objective_dmg_per_min: 270.0, turret_dmg: 4000.0, cc_per_game: 28.0, damage_share: 0.20, multikills: 0.6, first_blood_rate: 0.15 };
const EMERALD: TierBaseline = TierBaseline { cs: 7.0, dpm: 700.0, vis: 1.4, kp: 0.50, solo: 1.8, deaths: 5.0, gold_per_min: 430.0, plates: 1.5, wards_placed: 10.0, wards_destroyed: 3.0, control_wards: 1.5, dragon_takedowns: 1.0, objective_dmg_per_min: 300.0, turret_dmg: 4500.0, cc_per_game: 32.0, damage_share: 0.20, multikills: 0.7, first_blood_rate: 0.16 };
const DIAMOND: TierBaseline = TierBaseline { cs: 7.5, dpm: 780.0, vis: 1.6, kp: 0.52, solo: 2.0, deaths: 4.8, gold_per_min: 460.0, plates: 1.8, wards_placed: 12.0, wards_destroyed: 3.5, control_wards: 2.0, dragon_takedowns: 1.1, objective_dmg_per_min: 330.0, turret_dmg: 5000.0, cc_per_game: 35.0, damage_share: 0.20, multikills: 0.8, first_blood_rate: 0.17 };
const MASTER: TierBaseline = TierBaseline { cs: 8.2, dpm: 850.0, vis: 1.8, kp: 0.55, solo: 2.2, deaths: 4.5, gold_per_min: 490.0, plates: 2.0, wards_placed: 14.0, wards_destroyed: 4.0, control_wards: 2.5, dragon_takedowns: 1.2, objective_dmg_per_min: 360.0, turret_dmg: 5500.0, cc_per_game: 38.0, damage_share: 0.20, multikills: 0.9, first_blood_rate: 0.18 };
const GRANDMASTER: TierBaseline = TierBaseline { cs: 8.8, dpm: 920.0, vis: 2.0, kp: 0.58, solo: 2.4, deaths: 4.2, gold_per_min: 510.0, plates: 2.2, wards_placed: 16.0, wards_destroyed: 4.5, control_wards: 3.0, dragon_takedowns: 1.3, objective_dmg_per_min: 390.0, turret_dmg: 6000.0, cc_per_game: 40.0, damage_share: 0.20, multikills: 1.0, first_blood_rate: 0.19 };
const CHALLENGER: TierBaseline = TierBaseline { cs: 9.5, dpm: 1000.0, vis: 2.2, kp: 0.60, solo: 2.6, deaths: 3.8, gold_per_min: 540.0, plates: 2.5, wards_placed: 18.0, wards_destroyed: 5.0, control_wards: 3.5, dragon_takedowns: 1.5, objective_dmg_per_min: 420.0, turret_dmg: 6500.0, cc_per_game: 45.0, damage_share: 0.20, multikills: 1.1, first_blood_rate: 0.20 };

/// Flat benchmark table consumed by the tag classifier, one entry per
/// tracked metric.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkSet {
    pub dpm: Benchmark,
    pub vision_per_min: Benchmark,
    pub cs_per_min: Benchmark,
    pub kill_participation: Benchmark,
    pub solo_kills: Benchmark,
    pub turret_damage: Benchmark,
    pub deaths: Benchmark,
}

pub const DEFAULT_BENCHMARKS: BenchmarkSet = BenchmarkSet {
    dpm: Benchmark { mean: 550.0, std_dev: 150.0 },
    vision_per_min: Benchmark { mean: 1.0, std_dev: 0.4 },
    cs_per_min: Benchmark { mean: 6.5, std_dev: 1.5 },
    kill_participation: Benchmark { mean: 0.5, std_dev: 0.15 },
    solo_kills: Benchmark { mean: 2.0, std_dev: 1.5 },
    turret_damage: Benchmark { mean: 2500.0, std_dev: 1200.0 },
    deaths: Benchmark { mean: 5.0, std_dev: 2.0 },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parses_case_insensitive() {
        assert_eq!("EMERALD".parse::<Tier>().unwrap(), Tier::Emerald);
        assert_eq!("gold".parse::<Tier>().unwrap(), Tier::Gold);
        assert_eq!("Challenger".parse::<Tier>().unwrap(), Tier::Challenger);
    }

    #[test]
    fn unknown_tier_fails_fast() {
        let err = "WOOD".parse::<Tier>().unwrap_err();
        assert!(matches!(err, AppError::UnknownTier(ref s) if s == "WOOD"));
    }

    #[test]
    fn tier_display_round_trips() {
        for tier in Tier::ALL {
            assert_eq!(tier.as_str().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn baselines_scale_with_tier() {
        // Higher brackets farm more and die less; the table must reflect that.
        for pair in Tier::ALL.windows(2) {
            let (lower, upper) = (pair[0].baseline(), pair[1].baseline());
            assert!(upper.cs > lower.cs);
            assert!(upper.dpm > lower.dpm);
            assert!(upper.deaths < lower.deaths);
        }
    }

    #[test]
    fn default_benchmarks_have_spread() {
        let set = DEFAULT_BENCHMARKS;
        for b in [
            set.dpm,
            set.vision_per_min,
            set.cs_per_min,
            set.kill_participation,
            set.solo_kills,
            set.turret_damage,
            set.deaths,
        ] {
            assert!(b.std_dev > 0.0);
            assert!(b.mean > 0.0);
        }
    }
}
