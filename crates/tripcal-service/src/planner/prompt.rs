use super::TripRequest;

/// System message sent with every itinerary request.
pub const SYSTEM_PROMPT: &str = "You are a professional travel planner.";

/// Builds the user message asking for an itinerary in the day/period layout.
#[must_use]
pub fn user_prompt(request: &TripRequest) -> String {
    format!(
        "Create a detailed {days}-day travel itinerary for {destination}.\n\
         \n\
         Structure strictly like this:\n\
         \n\
         Day 1:\n\
         Morning: ...\n\
         Afternoon: ...\n\
         Evening: ...\n\
         \n\
         Continue same format for all days.",
        days = request.days,
        destination = request.destination,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::extract_all;

    #[test]
    fn prompt_names_trip() {
        let request = TripRequest::new("Lisbon", 4).unwrap();
        let prompt = user_prompt(&request);

        assert!(prompt.starts_with("Create a detailed 4-day travel itinerary for Lisbon."));
        assert!(prompt.ends_with("Continue same format for all days."));
    }

    #[test]
    fn prompt_template_follows_convention() {
        let request = TripRequest::new("Lisbon", 1).unwrap();

        // The example block in the prompt must itself segment cleanly.
        let periods = extract_all(&user_prompt(&request));

        assert_eq!(periods.len(), 3);
        assert!(periods.iter().all(|p| p.day == 1));
    }
}
