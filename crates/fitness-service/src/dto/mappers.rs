//! Entity to DTO mappers
//!
//! `From` conversions from domain entities to response DTOs, and from
//! request DTOs to the insertable / updatable domain projections.

use fitness_core::entities::{
    Exercise, ExerciseChanges, Member, MemberChanges, NewExercise, NewMember, SessionChanges,
    WorkoutSession,
};

use super::requests::{
    CreateExerciseRequest, CreateMemberRequest, UpdateExerciseRequest, UpdateMemberRequest,
    UpdateSessionRequest,
};
use super::responses::{ExerciseResponse, MemberResponse, SessionResponse};

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name.clone(),
            email: member.email.clone(),
            avatar: member.avatar.clone(),
            joined_at: member.joined_at,
            is_active: member.is_active,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

impl From<CreateMemberRequest> for NewMember {
    fn from(req: CreateMemberRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            avatar: req.avatar,
            is_active: req.is_active,
        }
    }
}

impl From<UpdateMemberRequest> for MemberChanges {
    fn from(req: UpdateMemberRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            avatar: req.avatar,
            is_active: req.is_active,
        }
    }
}

// ============================================================================
// Exercise Mappers
// ============================================================================

impl From<&Exercise> for ExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id.to_string(),
            name: exercise.name.clone(),
            description: exercise.description.clone(),
            category: exercise.category.clone(),
            difficulty: exercise.difficulty.clone(),
            calories_per_minute: exercise.calories_per_minute,
            proper_form_tips: exercise.proper_form_tips.clone(),
            common_mistakes: exercise.common_mistakes.clone(),
        }
    }
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self::from(&exercise)
    }
}

impl From<CreateExerciseRequest> for NewExercise {
    fn from(req: CreateExerciseRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            category: req.category,
            difficulty: req.difficulty,
            calories_per_minute: req.calories_per_minute,
            proper_form_tips: req.proper_form_tips,
            common_mistakes: req.common_mistakes,
        }
    }
}

impl From<UpdateExerciseRequest> for ExerciseChanges {
    fn from(req: UpdateExerciseRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            category: req.category,
            difficulty: req.difficulty,
            calories_per_minute: req.calories_per_minute,
            proper_form_tips: req.proper_form_tips,
            common_mistakes: req.common_mistakes,
        }
    }
}

// ============================================================================
// Session Mappers
// ============================================================================

impl From<&WorkoutSession> for SessionResponse {
    fn from(session: &WorkoutSession) -> Self {
        Self {
            id: session.id.to_string(),
            member_id: session.member_id.to_string(),
            exercise_id: session.exercise_id.to_string(),
            start_time: session.start_time,
            end_time: session.end_time,
            duration: session.duration,
            reps: session.reps,
            calories_burned: session.calories_burned,
            average_posture_accuracy: session.average_posture_accuracy,
            posture_scores: session.posture_scores.clone(),
            status: session.status,
        }
    }
}

impl From<WorkoutSession> for SessionResponse {
    fn from(session: WorkoutSession) -> Self {
        Self::from(&session)
    }
}

impl From<UpdateSessionRequest> for SessionChanges {
    fn from(req: UpdateSessionRequest) -> Self {
        Self {
            end_time: req.end_time,
            duration: req.duration,
            reps: req.reps,
            calories_burned: req.calories_burned,
            average_posture_accuracy: req.average_posture_accuracy,
            posture_scores: req.posture_scores,
            status: req.status,
        }
    }
}
