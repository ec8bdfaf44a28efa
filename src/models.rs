use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingType {
    Fasting,
    #[serde(rename = "Pre-Meal")]
    PreMeal,
    #[serde(rename = "After Meal")]
    AfterMeal,
    Bedtime,
}

impl ReadingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingType::Fasting => "Fasting",
            ReadingType::PreMeal => "Pre-Meal",
            ReadingType::AfterMeal => "After Meal",
            ReadingType::Bedtime => "Bedtime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlucoseStatus {
    Low,
    Normal,
    Elevated,
    High,
}

impl GlucoseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlucoseStatus::Low => "Low",
            GlucoseStatus::Normal => "Normal",
            GlucoseStatus::Elevated => "Elevated",
            GlucoseStatus::High => "High",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub id: String,
    pub date: String,
    pub time: String,
    pub value: u32,
    #[serde(rename = "type")]
    pub reading_type: ReadingType,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub avg: u32,
    pub min: u32,
    pub max: u32,
    pub count: usize,
}

impl Stats {
    pub fn empty() -> Self {
        Self {
            avg: 0,
            min: 0,
            max: 0,
            count: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterRange {
    #[serde(rename = "3Days")]
    ThreeDays,
    #[default]
    #[serde(rename = "1Week")]
    OneWeek,
    #[serde(rename = "1Month")]
    OneMonth,
    Custom,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RangeQuery {
    #[serde(default)]
    pub filter: FilterRange,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    pub telegram_chat_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewReadingRequest {
    pub date: String,
    pub time: String,
    pub value: u32,
    #[serde(rename = "type")]
    pub reading_type: ReadingType,
}

#[derive(Debug, Serialize)]
pub struct ReadingView {
    pub id: String,
    pub date: String,
    pub time: String,
    pub value: u32,
    #[serde(rename = "type")]
    pub reading_type: ReadingType,
    pub status: GlucoseStatus,
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
pub struct ReadingsResponse {
    pub readings: Vec<ReadingView>,
    pub stats: Stats,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct SettingsRequest {
    pub telegram_chat_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub telegram_chat_id: Option<String>,
    pub notifier_configured: bool,
}

#[derive(Debug, Deserialize)]
pub struct TestMessageRequest {
    pub chat_id: String,
}

#[derive(Debug, Serialize)]
pub struct TestMessageResponse {
    pub ok: bool,
    pub error: Option<String>,
}
