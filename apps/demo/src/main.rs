use chrono::NaiveDate;
use dotenv::dotenv;
use rand::SeedableRng;
use serde_json::json;
use std::collections::HashMap;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use scheduling_cell::services::time::format_time;
use scheduling_cell::{
    pick_random, AvailabilityService, BookingDraft, ConflictIndex, RosterService,
    SequenceScheduler,
};
use shared_models::{BookingRecord, Employee, Service};

fn main() {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Spa booking availability walkthrough");

    let anna_id = Uuid::new_v4();
    let boris_id = Uuid::new_v4();
    let clara_id = Uuid::new_v4();

    // Every schedule shape the backend emits, normalized by the engine.
    let roster: Vec<Employee> = serde_json::from_value(json!([
        {
            "id": anna_id,
            "name": "Anna",
            "isActive": true,
            "workSchedule": {
                "weekly": {
                    "monday": "09:00-12:00",
                    "tuesday": ["09:00-13:00", "14:00-18:00"],
                    "friday": { "startTime": "09:00", "endTime": "17:00" }
                },
                "overrides": [
                    { "date": "2026-09-04", "isWorking": false, "reason": "vacation" }
                ]
            }
        },
        {
            "id": boris_id,
            "name": "Boris",
            "isActive": true,
            "workSchedule": {
                "weekly": {
                    "monday": { "isWorking": true, "startTime": "10:00", "endTime": "13:00" },
                    "friday": { "shiftsData": [
                        { "startTime": "10:00", "endTime": "14:00" },
                        { "startTime": "15:00", "endTime": "20:00" }
                    ] }
                }
            }
        },
        {
            "id": clara_id,
            "name": "Clara",
            "isActive": false,
            "workSchedule": {
                "weekly": { "monday": "08:00-20:00" }
            }
        }
    ]))
    .expect("roster fixture deserializes");

    let massage = Service {
        id: Uuid::new_v4(),
        name: "Deep tissue massage".into(),
        duration_minutes: 60,
        price: 85.0,
    };
    let facial = Service {
        id: Uuid::new_v4(),
        name: "Facial".into(),
        duration_minutes: 45,
        price: 60.0,
    };

    // Monday 2026-09-07. Anna already has an 11:00-11:30 commitment.
    let date = NaiveDate::from_ymd_opt(2026, 9, 7).expect("valid date");
    let bookings: Vec<BookingRecord> = serde_json::from_value(json!([
        {
            "bookingId": Uuid::new_v4(),
            "date": "2026-09-07",
            "segments": [
                {
                    "employeeId": anna_id,
                    "startTime": "11:00",
                    "endTime": "11:30",
                    "serviceName": "Manicure"
                }
            ]
        }
    ]))
    .expect("booking fixture deserializes");
    let index = ConflictIndex::build(&bookings);

    let anna = roster.iter().find(|e| e.id == anna_id).expect("anna in roster");
    let availability = AvailabilityService::new();
    let starts = availability
        .valid_starts(anna, date, massage.duration_minutes, &index)
        .expect("availability computes");
    println!(
        "{} can start '{}' on {} at: {}",
        anna.name,
        massage.name,
        date,
        render_times(&starts)
    );

    let roster_service = RosterService::new();
    let eligible = roster_service
        .professionals_with_availability(&massage, date, &roster, &index)
        .expect("aggregation computes");
    println!(
        "Professionals with availability: {}",
        eligible
            .iter()
            .map(|entry| entry.employee.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let mut rng = rand::rngs::StdRng::from_entropy();
    if let Some(chosen) = pick_random(&mut rng, &eligible) {
        println!("Random pick for 'any professional': {}", chosen.employee.name);
    }

    // Massage with Anna followed immediately by a facial with Boris.
    let services = vec![massage.clone(), facial.clone()];
    let mut assignments: HashMap<Uuid, Employee> = HashMap::new();
    assignments.insert(massage.id, anna.clone());
    assignments.insert(
        facial.id,
        roster.iter().find(|e| e.id == boris_id).expect("boris in roster").clone(),
    );

    let scheduler = SequenceScheduler::new();
    let candidates = scheduler
        .valid_sequence_starts(&services, &assignments, date, &index)
        .expect("sequencing computes");
    println!(
        "Back-to-back anchors for massage+facial: {}",
        render_times(
            &candidates
                .iter()
                .map(|candidate| candidate.anchor_start)
                .collect::<Vec<_>>()
        )
    );

    if let Some(first) = candidates.first() {
        let draft = BookingDraft::new()
            .with_date(date)
            .with_service(massage.id)
            .with_service(facial.id)
            .with_sequence(first);
        println!(
            "Draft anchored at {} is ready: {}",
            format_time(first.anchor_start).expect("anchor in range"),
            draft.is_ready()
        );
    }
}

fn render_times(minutes: &[i32]) -> String {
    minutes
        .iter()
        .map(|&minute| format_time(minute).unwrap_or_else(|_| minute.to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}
