use crate::models::{GlucoseStatus, ReadingType};

// Simplified clinical thresholds; upper bounds are inclusive.
pub fn classify(value: u32, reading_type: ReadingType) -> GlucoseStatus {
    if value < 70 {
        return GlucoseStatus::Low;
    }

    match reading_type {
        ReadingType::Fasting | ReadingType::PreMeal => {
            if value <= 100 {
                GlucoseStatus::Normal
            } else if value <= 125 {
                GlucoseStatus::Elevated
            } else {
                GlucoseStatus::High
            }
        }
        ReadingType::AfterMeal | ReadingType::Bedtime => {
            if value <= 140 {
                GlucoseStatus::Normal
            } else if value <= 180 {
                GlucoseStatus::Elevated
            } else {
                GlucoseStatus::High
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [ReadingType; 4] = [
        ReadingType::Fasting,
        ReadingType::PreMeal,
        ReadingType::AfterMeal,
        ReadingType::Bedtime,
    ];

    #[test]
    fn below_seventy_is_low_for_every_type() {
        for reading_type in ALL_TYPES {
            assert_eq!(classify(69, reading_type), GlucoseStatus::Low);
            assert_eq!(classify(1, reading_type), GlucoseStatus::Low);
        }
    }

    #[test]
    fn seventy_is_not_low() {
        for reading_type in ALL_TYPES {
            assert_ne!(classify(70, reading_type), GlucoseStatus::Low);
        }
    }

    #[test]
    fn fasting_and_pre_meal_boundaries() {
        for reading_type in [ReadingType::Fasting, ReadingType::PreMeal] {
            assert_eq!(classify(100, reading_type), GlucoseStatus::Normal);
            assert_eq!(classify(101, reading_type), GlucoseStatus::Elevated);
            assert_eq!(classify(125, reading_type), GlucoseStatus::Elevated);
            assert_eq!(classify(126, reading_type), GlucoseStatus::High);
        }
    }

    #[test]
    fn after_meal_and_bedtime_boundaries() {
        for reading_type in [ReadingType::AfterMeal, ReadingType::Bedtime] {
            assert_eq!(classify(140, reading_type), GlucoseStatus::Normal);
            assert_eq!(classify(141, reading_type), GlucoseStatus::Elevated);
            assert_eq!(classify(180, reading_type), GlucoseStatus::Elevated);
            assert_eq!(classify(181, reading_type), GlucoseStatus::High);
        }
    }
}
