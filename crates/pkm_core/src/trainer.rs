use serde::{Deserialize, Serialize};

use crate::gender::Gender;

/// Minimal trainer identity used when stamping records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerInfo {
    pub ot: String,
    pub tid: u16,
    pub sid: u16,
    pub gender: Gender,
    pub language: u8,
    pub game: u8,
    pub generation: u8,
}

impl TrainerInfo {
    /// Language id for English.
    pub const LANGUAGE_ENGLISH: u8 = 2;
    /// Game id for Emerald.
    pub const GAME_EMERALD: u8 = 3;
}

impl Default for TrainerInfo {
    fn default() -> Self {
        Self {
            ot: "TRAINER".to_string(),
            tid: 12345,
            sid: 54321,
            gender: Gender::Male,
            language: Self::LANGUAGE_ENGLISH,
            game: Self::GAME_EMERALD,
            generation: 3,
        }
    }
}
