//! Built-in prompt decks shipped with the game

use std::collections::BTreeMap;
use tod_domain::{DomainError, ThemeDeck};

const GENERAL_TRUTHS: &[&str] = &[
    "What's the most embarrassing thing you've ever done?",
    "What's a secret you've never told anyone?",
    "What's your biggest fear?",
    "Who in this room do you have a crush on?",
    "What's the biggest lie you've ever told?",
    "What's the most bizarre dream you've had?",
    "What's something you've done that you hope no one ever finds out about?",
    "What's the most awkward date you've been on?",
    "What's a talent you wish you had?",
    "If you could swap lives with anyone for a day, who would it be?",
];

const GENERAL_DARES: &[&str] = &[
    "Take a selfie with the weirdest facial expression possible",
    "Do your best impression of another player",
    "Call a friend and sing them a love song",
    "Post something embarrassing on social media",
    "Dance without music for 30 seconds",
    "Let another player draw on your face with a marker",
    "Do a TikTok dance in front of everyone",
    "Eat a spoonful of something spicy",
    "Send a ridiculous text to your last contact",
    "Wear your clothes backwards for the next round",
];

const OUTDOOR_TRUTHS: &[&str] = &[
    "What's the wildest outdoor adventure you've ever been on?",
    "Have you ever gotten lost while hiking?",
    "What's your favorite outdoor activity?",
    "Tell a story about a camping trip gone wrong",
    "What's the most beautiful natural place you've ever visited?",
    "Have you ever been camping?",
    "What outdoor skill do you wish you had?",
    "What's the longest hike you've ever done?",
    "Do you prefer beaches or mountains?",
    "What's an outdoor activity that scares you?",
];

const OUTDOOR_DARES: &[&str] = &[
    "Do 10 jumping jacks",
    "Walk like a penguin for a full minute",
    "Find and collect 3 pieces of trash",
    "Do a cartwheel",
    "Climb a tree (safely)",
    "Run around the block",
    "Do a bear crawl for 10 meters",
    "Spin around 5 times and try to walk in a straight line",
    "Do push-ups outside",
    "Make an animal sound and imitate its movement",
];

const BUILTIN: &[(&str, &[&str], &[&str])] = &[
    ("General", GENERAL_TRUTHS, GENERAL_DARES),
    ("Outdoor", OUTDOOR_TRUTHS, OUTDOOR_DARES),
];

fn owned(prompts: &[&str]) -> Vec<String> {
    prompts.iter().map(|s| s.to_string()).collect()
}

/// The decks bundled with the binary, keyed by theme name
pub fn builtin_decks() -> Result<BTreeMap<String, ThemeDeck>, DomainError> {
    BUILTIN
        .iter()
        .map(|(theme, truths, dares)| {
            ThemeDeck::new(theme, owned(truths), owned(dares))
                .map(|deck| (theme.to_string(), deck))
        })
        .collect()
}
