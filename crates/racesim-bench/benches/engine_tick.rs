use criterion::{black_box, criterion_group, criterion_main, Criterion};
use racesim_core::{
    Driver, DriverId, PerformanceScores, PersonalityScores, PitLane, Sector, SectorType,
    SkillScores, Track, TrackId, WeatherParams,
};
use racesim_engine::{Engine, SimConfig};

fn driver(id: &str) -> Driver {
    Driver::new(
        DriverId::new(id).unwrap(),
        id,
        "Team",
        "#fff",
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
            aggression: 55.0,
            stress_resistance: 70.0,
            team_player: 70.0,
        },
        80.0,
        80.0,
    )
    .unwrap()
}

fn track() -> Track {
    Track::new(
        TrackId::new("bench").unwrap(),
        "Bench Circuit",
        5000.0,
        40,
        vec![Sector {
            id: 1,
            name: "S1".into(),
            start_distance: 0.0,
            end_distance: 5000.0,
            sector_type: SectorType::Straight,
            difficulty: 0.3,
            max_speed: None,
        }],
        vec![],
        PitLane {
            entry_distance: 4700.0,
            exit_distance: 100.0,
            speed_limit: 22.2,
            stop_time: None,
        },
        WeatherParams {
            volatility: 0.3,
            rain_probability: 0.1,
        },
        25.0,
    )
    .unwrap()
}

fn twenty_car_engine() -> Engine {
    let drivers = (0..20).map(|i| driver(&format!("driver{i}"))).collect();
    let config = SimConfig {
        track: track(),
        drivers,
        total_laps: 40,
        seed: 1,
    };
    let mut engine = Engine::new(config).unwrap();
    engine.start_race();
    engine
}

fn bench_single_tick(c: &mut Criterion) {
    let mut engine = twenty_car_engine();
    c.bench_function("engine_tick_20_cars", |b| {
        b.iter(|| {
            engine.update(black_box(0.1));
        })
    });
}

criterion_group!(benches, bench_single_tick);
criterion_main!(benches);
