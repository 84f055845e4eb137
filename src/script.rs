//! The static narration script.
//!
//! Every line the narrator speaks during a night phase, keyed by a
//! stable identifier that doubles as the output filename stem. Table
//! order is playback order for the standard role set.

/// One line of the narrator script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrationLine {
    pub key: &'static str,
    pub text: &'static str,
}

const fn line(key: &'static str, text: &'static str) -> NarrationLine {
    NarrationLine { key, text }
}

/// The full narration script, in playback order.
pub const NARRATION_SCRIPT: &[NarrationLine] = &[
    line("night_falls", "Night falls. Everyone close your eyes."),
    line("mason_wake", "Mason, wake up."),
    line(
        "mason_task",
        "Look for other Masons. If you are alone, there is a Mason card in the center.",
    ),
    line("mason_sleep", "Mason, close your eyes."),
    line("werewolf_wake", "Werewolf, wake up."),
    line(
        "werewolf_task",
        "Look for other Werewolves. If you are the only Werewolf, you may look at one center card.",
    ),
    line("werewolf_sleep", "Werewolf, close your eyes."),
    line("minion_wake", "Minion, wake up."),
    line(
        "minion_task",
        "Look at who the Werewolves are. They do not know who you are. You win if they survive.",
    ),
    line("minion_sleep", "Minion, close your eyes."),
    line("seer_wake", "Seer, wake up."),
    line(
        "seer_task",
        "You may look at one other players card, or look at two cards from the center.",
    ),
    line("seer_sleep", "Seer, close your eyes."),
    line("robber_wake", "Robber, wake up."),
    line(
        "robber_task",
        "You may swap your card with another players card. Then look at your new card.",
    ),
    line("robber_sleep", "Robber, close your eyes."),
    line("troublemaker_wake", "Troublemaker, wake up."),
    line(
        "troublemaker_task",
        "You may swap the cards of two other players. They will not know their cards were swapped.",
    ),
    line("troublemaker_sleep", "Troublemaker, close your eyes."),
    line("drunk_wake", "Drunk, wake up."),
    line(
        "drunk_task",
        "You must swap your card with one card from the center. You may not look at your new card.",
    ),
    line("drunk_sleep", "Drunk, close your eyes."),
    line("insomniac_wake", "Insomniac, wake up."),
    line(
        "insomniac_task",
        "Look at your card to see if it has changed during the night.",
    ),
    line("insomniac_sleep", "Insomniac, close your eyes."),
    line(
        "everyone_wake",
        "Everyone, wake up! The sun has risen. It is time to discuss.",
    ),
    line(
        "time_to_vote",
        "Time to vote. Everyone, point to who you think is a werewolf.",
    ),
];

/// Accessor for the built-in script.
pub fn narration_script() -> &'static [NarrationLine] {
    NARRATION_SCRIPT
}
