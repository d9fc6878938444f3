//! Demo records loaded into a fresh store on startup
//!
//! Three members, five exercises and one completed session per member.
//! Ids are generated, so callers should look records up by email or name.

use chrono::{DateTime, Duration, Utc};

use fitness_core::entities::{Exercise, Member, NewExercise, NewMember, WorkoutSession};
use fitness_core::{RecordId, SessionStatus};

use crate::storage::MemStorage;

/// Number of records inserted per table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedCounts {
    pub members: usize,
    pub exercises: usize,
    pub sessions: usize,
}

/// Load the fixtures relative to the current time
pub fn load(storage: &MemStorage) -> LoadedCounts {
    load_at(storage, Utc::now())
}

/// Load the fixtures with every timestamp derived from `now`
pub fn load_at(storage: &MemStorage, now: DateTime<Utc>) -> LoadedCounts {
    let members: Vec<Member> = [
        ("Alex Johnson", "alex@example.com", 30),
        ("Sarah Chen", "sarah@example.com", 15),
        ("Mike Williams", "mike@example.com", 45),
    ]
    .into_iter()
    .map(|(name, email, days_ago)| {
        Member::new(
            RecordId::generate(),
            NewMember::new(name, email),
            now - Duration::days(days_ago),
        )
    })
    .collect();

    let exercises: Vec<Exercise> = exercise_catalog()
        .into_iter()
        .map(|input| Exercise::new(RecordId::generate(), input))
        .collect();

    // (member, exercise, started minutes ago, duration s, reps, calories, accuracy, samples)
    let history = [
        (0, 0, 180, 1800, 50, 210.0, 87.0, [85.0, 88.0, 86.0, 89.0, 87.0]),
        (1, 1, 120, 1500, 40, 200.0, 92.0, [90.0, 93.0, 91.0, 94.0, 92.0]),
        (2, 2, 60, 1200, 30, 240.0, 78.0, [75.0, 80.0, 77.0, 79.0, 78.0]),
    ];
    let sessions: Vec<WorkoutSession> = history
        .into_iter()
        .map(
            |(member, exercise, started, duration, reps, calories, accuracy, samples)| {
                let start_time = now - Duration::minutes(started);
                WorkoutSession {
                    id: RecordId::generate(),
                    member_id: members[member].id.clone(),
                    exercise_id: exercises[exercise].id.clone(),
                    start_time,
                    end_time: Some(start_time + Duration::minutes(30)),
                    duration: Some(duration),
                    reps,
                    calories_burned: calories,
                    average_posture_accuracy: accuracy,
                    posture_scores: samples.to_vec(),
                    status: SessionStatus::Completed,
                }
            },
        )
        .collect();

    let counts = LoadedCounts {
        members: members.len(),
        exercises: exercises.len(),
        sessions: sessions.len(),
    };

    let member_repo = storage.members();
    members.into_iter().for_each(|m| member_repo.insert_record(m));
    let exercise_repo = storage.exercises();
    exercises.into_iter().for_each(|e| exercise_repo.insert_record(e));
    let session_repo = storage.sessions();
    sessions.into_iter().for_each(|s| session_repo.insert_record(s));

    counts
}

fn exercise_catalog() -> Vec<NewExercise> {
    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    vec![
        NewExercise {
            name: "Push-ups".to_string(),
            description: "A classic upper body exercise that targets chest, shoulders, and triceps"
                .to_string(),
            category: "strength".to_string(),
            difficulty: "beginner".to_string(),
            calories_per_minute: 7.0,
            proper_form_tips: strings(&[
                "Keep your body in a straight line",
                "Lower until chest nearly touches the ground",
                "Push back up to starting position",
            ]),
            common_mistakes: strings(&[
                "Sagging hips",
                "Flared elbows",
                "Not going deep enough",
            ]),
        },
        NewExercise {
            name: "Squats".to_string(),
            description: "Lower body exercise targeting quads, hamstrings, and glutes".to_string(),
            category: "strength".to_string(),
            difficulty: "beginner".to_string(),
            calories_per_minute: 8.0,
            proper_form_tips: strings(&[
                "Feet shoulder-width apart",
                "Lower until thighs are parallel to ground",
                "Keep chest up and core engaged",
            ]),
            common_mistakes: strings(&[
                "Knees caving inward",
                "Heels lifting off ground",
                "Leaning too far forward",
            ]),
        },
        NewExercise {
            name: "Burpees".to_string(),
            description: "Full body cardio exercise combining squat, plank, and jump".to_string(),
            category: "cardio".to_string(),
            difficulty: "intermediate".to_string(),
            calories_per_minute: 12.0,
            proper_form_tips: strings(&[
                "Start in standing position",
                "Drop to plank position",
                "Do a push-up, then jump feet to hands",
                "Jump up explosively",
            ]),
            common_mistakes: strings(&[
                "Skipping the push-up",
                "Poor plank form",
                "Landing heavily on jump",
            ]),
        },
        NewExercise {
            name: "Plank".to_string(),
            description: "Core strengthening isometric exercise".to_string(),
            category: "strength".to_string(),
            difficulty: "beginner".to_string(),
            calories_per_minute: 5.0,
            proper_form_tips: strings(&[
                "Maintain straight line from head to heels",
                "Engage core muscles",
                "Keep elbows under shoulders",
            ]),
            common_mistakes: strings(&["Hips sagging", "Hips too high", "Holding breath"]),
        },
        NewExercise {
            name: "Lunges".to_string(),
            description: "Lower body exercise for legs and glutes".to_string(),
            category: "strength".to_string(),
            difficulty: "intermediate".to_string(),
            calories_per_minute: 6.5,
            proper_form_tips: strings(&[
                "Step forward with one leg",
                "Lower hips until both knees at 90 degrees",
                "Push back to starting position",
            ]),
            common_mistakes: strings(&[
                "Front knee over toes",
                "Leaning forward too much",
                "Short range of motion",
            ]),
        },
    ]
}
