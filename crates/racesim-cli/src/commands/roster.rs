//! A small built-in track and driver roster for the demo commands.

use racesim_core::{
    Driver, DriverId, DrsZone, PerformanceScores, PersonalityScores, PitLane, Sector, SectorType,
    SkillScores, Track, TrackId, WeatherParams,
};

pub fn demo_track() -> Track {
    Track::new(
        TrackId::new("monza").unwrap(),
        "Autodromo Nazionale Monza",
        5793.0,
        53,
        vec![
            Sector {
                id: 1,
                name: "Rettifilo".into(),
                start_distance: 0.0,
                end_distance: 2100.0,
                sector_type: SectorType::Straight,
                difficulty: 0.2,
                max_speed: None,
            },
            Sector {
                id: 2,
                name: "Variante del Rettifilo".into(),
                start_distance: 2100.0,
                end_distance: 3900.0,
                sector_type: SectorType::CornerMediumSpeed,
                difficulty: 0.5,
                max_speed: None,
            },
            Sector {
                id: 3,
                name: "Parabolica".into(),
                start_distance: 3900.0,
                end_distance: 5793.0,
                sector_type: SectorType::CornerHighSpeed,
                difficulty: 0.4,
                max_speed: None,
            },
        ],
        vec![DrsZone {
            detection_distance: 5400.0,
            activation_distance: 5550.0,
            end_distance: 5793.0,
        }],
        PitLane {
            entry_distance: 5500.0,
            exit_distance: 150.0,
            speed_limit: 22.2,
            stop_time: None,
        },
        WeatherParams {
            volatility: 0.35,
            rain_probability: 0.15,
        },
        27.0,
    )
    .expect("built-in track is well-formed")
}

pub fn demo_drivers(count: usize) -> Vec<Driver> {
    const NAMES: &[(&str, &str, &str, f64)] = &[
        ("verstappen", "Max Verstappen", "Red Bull", 65.0),
        ("hamilton", "Lewis Hamilton", "Mercedes", 55.0),
        ("leclerc", "Charles Leclerc", "Ferrari", 70.0),
        ("norris", "Lando Norris", "McLaren", 50.0),
        ("alonso", "Fernando Alonso", "Aston Martin", 60.0),
        ("russell", "George Russell", "Mercedes", 52.0),
        ("sainz", "Carlos Sainz", "Ferrari", 58.0),
        ("piastri", "Oscar Piastri", "McLaren", 48.0),
    ];

    NAMES
        .iter()
        .take(count.min(NAMES.len()))
        .map(|(id, name, team, aggression)| {
            Driver::new(
                DriverId::new(*id).unwrap(),
                *name,
                *team,
                "#ffffff",
                86.0,
                SkillScores {
                    racecraft: 80.0,
                    consistency: 82.0,
                    tyre_management: 75.0,
                    wet_weather: 70.0,
                },
                PerformanceScores {
                    cornering_high: 85.0,
                    cornering_medium: 85.0,
                    cornering_low: 85.0,
                    straight: 85.0,
                    temperature_adaptability: 78.0,
                },
                PersonalityScores {
                    aggression: *aggression,
                    stress_resistance: 70.0,
                    team_player: 70.0,
                },
                80.0,
                80.0,
            )
            .expect("built-in driver scores are within range")
        })
        .collect()
}
