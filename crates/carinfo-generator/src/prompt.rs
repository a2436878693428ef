use carinfo_core::CarQuery;

const RECORD_TEMPLATE: &str = r#"{
  "name": "Full car name and model",
  "tagline": "Brief marketing tagline",
  "imageUrl": "https://images.unsplash.com/photo-[id]?w=1200&q=80",
  "history": "Paragraph on the car's history, development and significance",
  "achievements": ["Achievement 1", "Achievement 2", "Achievement 3"],
  "keyMilestones": ["Milestone 1", "Milestone 2", "Milestone 3"],
  "innovationAwards": ["Award 1", "Award 2", "Award 3"],
  "specs": {
    "engine": "Engine type and configuration",
    "power": "Maximum power output",
    "torque": "Maximum torque",
    "topSpeed": "Top speed",
    "acceleration": "0-60 mph time",
    "drive": "FWD/RWD/AWD",
    "range": "Driving range or fuel economy",
    "consumption": "Energy consumption or MPG",
    "emissions": "CO2 emissions",
    "charging": "Charging time (electric)",
    "battery": "Battery capacity (electric)"
  },
  "pricing": {
    "usa": "Price in USD with currency symbol",
    "china": "Price in CNY with currency symbol",
    "india": "Price in INR with currency symbol",
    "dubai": "Price in AED with currency symbol"
  },
  "manufacturing": {
    "manufacturer": "Primary manufacturer",
    "chipPartner": "Chip partner if applicable",
    "batteryPartner": "Battery partner if applicable",
    "locations": ["Location 1", "Location 2"]
  },
  "competitors": [
    {"name": "Competitor 1", "price": "Price"},
    {"name": "Competitor 2", "price": "Price"}
  ],
  "ratings": {"overall": 4.5, "performance": 9.0, "technology": 8.5, "value": 8.0}
}"#;

/// Instructions sent as the single user message.
pub fn build_prompt(query: &CarQuery) -> String {
    format!(
        "You are an automotive research expert. Analyze this query: \"{query}\"\n\n\
         If the query is not a car model, vehicle or car brand, respond with exactly:\n\
         {{\"error\": \"Please enter a valid car model name. This service provides automotive information only.\"}}\n\n\
         If only a brand is given, pick a popular model from that brand. If the model is unclear, \
         use the closest matching vehicle.\n\n\
         Otherwise respond with this JSON structure, every field filled:\n\
         {RECORD_TEMPLATE}\n\n\
         Ratings are numbers: overall out of 5, the others out of 10. All other values are strings.\n\
         Respond ONLY with the raw JSON object, no markdown fences and no other text."
    )
}
