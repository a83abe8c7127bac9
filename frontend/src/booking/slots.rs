pub const FIRST_HOUR: u32 = 9;
pub const SLOT_COUNT: usize = 18;

/// Half-hour consultation slots, "09:00" through "17:30".
pub fn time_slots() -> impl Iterator<Item = String> {
    (0..SLOT_COUNT).map(|i| {
        let hour = FIRST_HOUR as usize + i / 2;
        let minute = if i % 2 == 0 { "00" } else { "30" };
        format!("{:02}:{}", hour, minute)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(label: &str) -> u32 {
        let (h, m) = label.split_once(':').unwrap();
        h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap()
    }

    #[test]
    fn test_slot_bounds() {
        let slots: Vec<String> = time_slots().collect();
        assert_eq!(slots.len(), 18);
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots.last().map(String::as_str), Some("17:30"));
    }

    #[test]
    fn test_slots_step_by_half_hour() {
        let slots: Vec<String> = time_slots().collect();
        for pair in slots.windows(2) {
            assert_eq!(minutes(&pair[1]) - minutes(&pair[0]), 30);
        }
        assert!(slots.iter().all(|s| s.len() == 5));
    }

    #[test]
    fn test_slots_are_regenerated_identically() {
        assert!(time_slots().eq(time_slots()));
    }
}
