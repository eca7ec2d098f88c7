//! Sample rotes inserted by the admin seed operation.

use crate::server::model::rote::CreateRoteParams;

/// (name, tradition, spheres, level, description)
const SAMPLE_ROTES: &[(&str, &str, &str, i32, &str)] = &[
    (
        "Call the Storm",
        "Verbena",
        "Forces 3, Prime 2",
        3,
        "The mage whips the local weather into a squall, drawing rain and lightning down on a chosen area.",
    ),
    (
        "Healing Touch",
        "Verbena",
        "Life 3",
        3,
        "By laying hands on a wounded body the mage knits flesh and bone back together.",
    ),
    (
        "Mind Shield",
        "Akashic Brotherhood",
        "Mind 1",
        1,
        "A calm, centred focus that turns aside attempts to read or sway the mage's thoughts.",
    ),
    (
        "Walking the Hidden Path",
        "Akashic Brotherhood",
        "Correspondence 2, Mind 1",
        2,
        "The mage slips between moments of attention and crosses a room without being noticed.",
    ),
    (
        "Ghost Sight",
        "Euthanatos",
        "Spirit 1, Entropy 1",
        1,
        "Lets the mage perceive restless dead and the decay they leave in the world around them.",
    ),
    (
        "The Fatal Thread",
        "Euthanatos",
        "Entropy 3",
        3,
        "Weakens the strand of fortune holding an object or structure together until it fails.",
    ),
    (
        "Digital Ghost",
        "Virtual Adepts",
        "Correspondence 2, Forces 2",
        2,
        "The mage projects their senses through a network connection to any connected device.",
    ),
    (
        "Quintessential Charge",
        "Sons of Ether",
        "Prime 2, Forces 2",
        2,
        "Channels raw Quintessence into a device so that it runs without any mundane power source.",
    ),
];

/// Returns the fixed sample set as insert parameters.
pub fn sample_rotes() -> Vec<CreateRoteParams> {
    SAMPLE_ROTES
        .iter()
        .map(
            |&(name, tradition, spheres, level, description)| CreateRoteParams {
                name: name.to_string(),
                tradition: tradition.to_string(),
                description: description.to_string(),
                spheres: spheres.to_string(),
                level,
                page: None,
            },
        )
        .collect()
}
