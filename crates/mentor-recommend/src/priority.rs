//! Priority and study-time rules.

use mentor_core::constants::{HIGH_PRIORITY_IMPORTANCE, MEDIUM_PRIORITY_IMPORTANCE};
use mentor_core::SkillLevel;

use crate::types::{Priority, Severity};

/// High needs both a high-severity gap and importance above 0.8; either a high severity
/// or importance above 0.7 gives medium.
pub fn calculate_priority(severity: Severity, importance: f64) -> Priority {
    let high_severity = severity == Severity::High;
    if high_severity && importance > HIGH_PRIORITY_IMPORTANCE {
        Priority::High
    } else if high_severity || importance > MEDIUM_PRIORITY_IMPORTANCE {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// `base_minutes` scaled by the skill multiplier, rounded to the nearest minute.
pub fn estimate_minutes(base_minutes: u32, skill: SkillLevel) -> u32 {
    (f64::from(base_minutes) * skill.time_multiplier()).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_table() {
        assert_eq!(calculate_priority(Severity::High, 0.9), Priority::High);
        assert_eq!(calculate_priority(Severity::High, 0.8), Priority::Medium);
        assert_eq!(calculate_priority(Severity::Medium, 0.8), Priority::Medium);
        assert_eq!(calculate_priority(Severity::Medium, 0.7), Priority::Low);
        assert_eq!(calculate_priority(Severity::Low, 0.2), Priority::Low);
    }

    #[test]
    fn minutes_scale_with_skill() {
        assert_eq!(estimate_minutes(120, SkillLevel::Beginner), 180);
        assert_eq!(estimate_minutes(120, SkillLevel::Intermediate), 120);
        assert_eq!(estimate_minutes(120, SkillLevel::Advanced), 84);
        assert_eq!(estimate_minutes(90, SkillLevel::Advanced), 63);
        // 45 * 1.5 = 67.5 rounds up.
        assert_eq!(estimate_minutes(45, SkillLevel::Beginner), 68);
    }
}
