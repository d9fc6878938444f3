//! Exercise entity - an exercise in the studio catalog

use crate::value_objects::RecordId;

/// Exercise entity
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub calories_per_minute: f64,
    pub proper_form_tips: Vec<String>,
    pub common_mistakes: Vec<String>,
}

/// Insertable projection of an exercise (every field but `id` is required)
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub calories_per_minute: f64,
    pub proper_form_tips: Vec<String>,
    pub common_mistakes: Vec<String>,
}

/// Partial update of an exercise
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub calories_per_minute: Option<f64>,
    pub proper_form_tips: Option<Vec<String>>,
    pub common_mistakes: Option<Vec<String>>,
}

impl ExerciseChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.difficulty.is_none()
            && self.calories_per_minute.is_none()
            && self.proper_form_tips.is_none()
            && self.common_mistakes.is_none()
    }
}

impl Exercise {
    /// Build a stored exercise from its insertable form
    pub fn new(id: RecordId, input: NewExercise) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            category: input.category,
            difficulty: input.difficulty,
            calories_per_minute: input.calories_per_minute,
            proper_form_tips: input.proper_form_tips,
            common_mistakes: input.common_mistakes,
        }
    }

    /// Produce a copy with every supplied field overwritten.
    /// Supplied sequences replace the stored ones.
    pub fn merged(&self, changes: &ExerciseChanges) -> Self {
        let mut updated = self.clone();
        if let Some(name) = &changes.name {
            updated.name.clone_from(name);
        }
        if let Some(description) = &changes.description {
            updated.description.clone_from(description);
        }
        if let Some(category) = &changes.category {
            updated.category.clone_from(category);
        }
        if let Some(difficulty) = &changes.difficulty {
            updated.difficulty.clone_from(difficulty);
        }
        if let Some(cpm) = changes.calories_per_minute {
            updated.calories_per_minute = cpm;
        }
        if let Some(tips) = &changes.proper_form_tips {
            updated.proper_form_tips.clone_from(tips);
        }
        if let Some(mistakes) = &changes.common_mistakes {
            updated.common_mistakes.clone_from(mistakes);
        }
        updated
    }
}
