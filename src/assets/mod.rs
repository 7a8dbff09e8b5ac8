/// Returns the glossary document compiled into the crate.
///
/// This is what `GlossarySource::Bundled` serves, so a fresh install can tag
/// shots before any custom glossary is configured.
pub fn glossary_json() -> &'static str {
    r#"{
  "shots": [
    { "name": "Serve (Short)", "description": "Low serve landing just past the short service line" },
    { "name": "Serve (Long)", "description": "High serve to the back of the service court" },
    { "name": "Clear", "description": "High, deep clear to the opponent's back court" },
    { "name": "Smash", "description": "Steep, powerful downward attack" },
    { "name": "Drop", "description": "Soft overhead shot falling just past the net" },
    { "name": "Drive", "description": "Flat, fast exchange at shoulder height" },
    { "name": "Net Shot", "description": "Tight tumble or spin close to the net tape" },
    { "name": "Lift", "description": "Defensive underarm lift from the forecourt" },
    { "name": "Push" },
    { "name": "Block", "description": "Short defensive reply off a smash" },
    { "name": "Kill", "description": "Net kill on a loose reply" }
  ],
  "dimensions": [
    { "key": "hand", "label": "Hand", "values": ["Forehand", "Backhand", "Around the head"] },
    { "key": "zone", "label": "Court zone", "values": ["Front", "Mid", "Rear"] },
    { "key": "intent", "label": "Intent", "values": ["Attack", "Neutral", "Defence"] },
    { "key": "outcome", "label": "Outcome", "values": ["Winner", "In play", "Forced error", "Unforced error"] }
  ]
}
"#
}
