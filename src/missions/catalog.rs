//! The built-in mission list.

use super::{Mission, MissionId};

/// Build the default mission set.
///
/// Every mission is phrased as something you make your target do in front
/// of the group — the social proof that the elimination happened.
pub fn builtin_missions() -> Vec<Mission> {
    const DESCRIPTIONS: &[&str] = &[
        "Make the target wear something ridiculous",
        "Make the target sing a song",
        "Make the target dance for at least ten seconds",
        "Make the target say 'I am a penguin' three times",
        "Make the target strike a ridiculous pose for a photo",
        "Make the target imitate an animal",
        "Make the target tell a joke",
        "Make the target do ten jumps",
        "Make the target recite the alphabet backwards",
        "Make the target stand on one foot until they lose balance",
        "Make the target draw your portrait with their eyes closed",
        "Make the target compliment three different people",
        "Make the target wear your shoes for five minutes",
        "Make the target speak in a foreign accent for five minutes",
        "Make the target eat a strange food combination",
        "Make the target spin around at least three times",
        "Make the target improvise a song or a poem",
        "Make the target impersonate a celebrity",
        "Make the target sing a song with changed lyrics",
        "Make the target run an improvised obstacle course",
        "Make the target give an improvised speech on a random topic",
        "Make the target invent a yoga pose",
        "Make the target walk like a robot",
        "Make the target tell a scary story",
        "Make the target draw with their non-dominant hand",
        "Make the target speak in rhymes for a while",
        "Make the target perform a mime the others must guess",
        "Make the target balance an object on their head",
        "Make the target invent and sing an advertising jingle",
        "Make the target give a thank-you speech as if at an awards show",
    ];

    DESCRIPTIONS
        .iter()
        .enumerate()
        .map(|(i, text)| Mission::new(MissionId::new(i as u16 + 1), *text))
        .collect()
}
