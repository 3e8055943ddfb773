//! The SRD ancestry table.

use crate::entities::{AncestryEntry, AncestryFeature};

/// All SRD ancestries, in presentation order.
pub fn ancestries() -> Vec<AncestryEntry> {
    vec![
        AncestryEntry::new(
            "Daemon",
            "<h2>Daemon</h2><p>Daemons are creatures of elemental chaos and wild magic, born from the intersection of multiple planes. They appear humanoid but bear clear marks of their otherworldly heritage through unusual skin tones, strange markings, or minor physical manifestations of their elemental nature.</p><h3>Ancestry Features</h3><p><strong>Elemental Resistance:</strong> You have resistance to one damage type of your choice (fire, cold, lightning, or poison).</p><p><strong>Chaotic Magic:</strong> Once per long rest, when you roll with Fear, you may choose to reroll both dice and take the new result.</p>",
            [
                AncestryFeature::new(
                    "Elemental Resistance",
                    "You have resistance to one damage type of your choice (fire, cold, lightning, or poison).",
                ),
                AncestryFeature::new(
                    "Chaotic Magic",
                    "Once per long rest, when you roll with Fear, you may choose to reroll both dice and take the new result.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Drakona",
            "<h2>Drakona</h2><p>The Drakona are descendants of ancient dragons, retaining draconic features like scales, claws, and sometimes small horns or tails. They are proud people with a strong connection to elemental magic and ancient lore.</p><h3>Ancestry Features</h3><p><strong>Dragon Scales:</strong> Your scales provide natural armor. You gain +1 Evasion.</p><p><strong>Elemental Breath:</strong> Once per short rest, you can exhale elemental energy in a close burst, dealing damage to enemies.</p>",
            [
                AncestryFeature::new(
                    "Dragon Scales",
                    "Your scales provide natural armor. You gain +1 Evasion.",
                ),
                AncestryFeature::new(
                    "Elemental Breath",
                    "Once per short rest, you can exhale elemental energy in a close burst, dealing damage to enemies.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Dwarf",
            "<h2>Dwarf</h2><p>Dwarves are a hardy people known for their skill in crafting, their love of the earth and stone, and their fierce loyalty to clan and family. They are typically shorter and more robust than humans, with a natural affinity for working with metal and stone.</p><h3>Ancestry Features</h3><p><strong>Stout:</strong> You have advantage on rolls to resist being moved against your will.</p><p><strong>Craftsmanship:</strong> You gain a +2 bonus when making or repairing items.</p>",
            [
                AncestryFeature::new(
                    "Stout",
                    "You have advantage on rolls to resist being moved against your will.",
                ),
                AncestryFeature::new(
                    "Craftsmanship",
                    "You gain a +2 bonus when making or repairing items.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Elf",
            "<h2>Elf</h2><p>Elves are graceful and long-lived people with a deep connection to magic and nature. They possess keen senses, natural agility, and an intuitive understanding of the mystical forces that shape the world.</p><h3>Ancestry Features</h3><p><strong>Keen Senses:</strong> You can sense magic within Close range, even if you can't see it.</p><p><strong>Nimble:</strong> Once per long rest, you may move to any space within Very Close range as a reaction.</p>",
            [
                AncestryFeature::new(
                    "Keen Senses",
                    "You can sense magic within Close range, even if you can't see it.",
                ),
                AncestryFeature::new(
                    "Nimble",
                    "Once per long rest, you may move to any space within Very Close range as a reaction.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Faerie",
            "<h2>Faerie</h2><p>Faeries are magical beings from the realm of dreams and stories. Small in stature but large in personality, they possess an innate connection to magic and the natural world, often displaying butterfly-like wings or other fey characteristics.</p><h3>Ancestry Features</h3><p><strong>Flight:</strong> You can fly at your normal speed, but must land at the end of your turn or fall.</p><p><strong>Fey Magic:</strong> You know one cantrip-level spell from any domain.</p>",
            [
                AncestryFeature::new(
                    "Flight",
                    "You can fly at your normal speed, but must land at the end of your turn or fall.",
                ),
                AncestryFeature::new(
                    "Fey Magic",
                    "You know one cantrip-level spell from any domain.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Firbolg",
            "<h2>Firbolg</h2><p>Firbolgs are gentle giants who serve as guardians of the natural world. Tall and strong, with a deep connection to forests and wild places, they are known for their wisdom and their ability to communicate with beasts and plants.</p><h3>Ancestry Features</h3><p><strong>Giant Strength:</strong> You count as one size larger for carrying capacity and wielding oversized weapons.</p><p><strong>Nature's Voice:</strong> You can communicate simple concepts with beasts and plants.</p>",
            [
                AncestryFeature::new(
                    "Giant Strength",
                    "You count as one size larger for carrying capacity and wielding oversized weapons.",
                ),
                AncestryFeature::new(
                    "Nature's Voice",
                    "You can communicate simple concepts with beasts and plants.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Galapa",
            "<h2>Galapa</h2><p>The Galapa are a turtle-like people who carry their homes on their backs. Patient and wise, they are natural philosophers and historians, known for their long memories and measured approach to life.</p><h3>Ancestry Features</h3><p><strong>Natural Armor:</strong> Your shell provides protection. You gain +2 HP.</p><p><strong>Retract:</strong> As a reaction, you can retract into your shell, gaining resistance to all damage until the start of your next turn.</p>",
            [
                AncestryFeature::new(
                    "Natural Armor",
                    "Your shell provides protection. You gain +2 HP.",
                ),
                AncestryFeature::new(
                    "Retract",
                    "As a reaction, you can retract into your shell, gaining resistance to all damage until the start of your next turn.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Giant",
            "<h2>Giant</h2><p>Giants are towering humanoids with immense strength and presence. They come in many varieties, from cloud giants who dwell in mountain peaks to stone giants who shape the earth itself.</p><h3>Ancestry Features</h3><p><strong>Massive:</strong> You are one size larger than normal and gain +3 HP.</p><p><strong>Mighty Throw:</strong> You can throw objects and creatures much farther than normal.</p>",
            [
                AncestryFeature::new(
                    "Massive",
                    "You are one size larger than normal and gain +3 HP.",
                ),
                AncestryFeature::new(
                    "Mighty Throw",
                    "You can throw objects and creatures much farther than normal.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Goblin",
            "<h2>Goblin</h2><p>Goblins are small, clever creatures known for their resourcefulness and adaptability. Often underestimated, they make up for their size with cunning, agility, and an uncanny ability to find opportunities in chaos.</p><h3>Ancestry Features</h3><p><strong>Small but Mighty:</strong> You can move through spaces occupied by larger creatures.</p><p><strong>Scrappy:</strong> When you take damage, you may move up to your speed as a reaction.</p>",
            [
                AncestryFeature::new(
                    "Small but Mighty",
                    "You can move through spaces occupied by larger creatures.",
                ),
                AncestryFeature::new(
                    "Scrappy",
                    "When you take damage, you may move up to your speed as a reaction.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Halfling",
            "<h2>Halfling</h2><p>Halflings are a cheerful and adaptable people who find joy in life's simple pleasures. Known for their luck, courage, and strong sense of community, they often serve as the heart that binds adventuring groups together.</p><h3>Ancestry Features</h3><p><strong>Lucky:</strong> Once per session, you may reroll any dice roll you make.</p><p><strong>Brave:</strong> You have advantage on rolls to resist fear effects.</p>",
            [
                AncestryFeature::new(
                    "Lucky",
                    "Once per session, you may reroll any dice roll you make.",
                ),
                AncestryFeature::new(
                    "Brave",
                    "You have advantage on rolls to resist fear effects.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Human",
            "<h2>Human</h2><p>Humans are versatile and ambitious people who adapt quickly to new situations. Though they lack the specialized traits of other ancestries, their determination and flexibility allow them to excel in any path they choose.</p><h3>Ancestry Features</h3><p><strong>Ambitious:</strong> Choose an additional Experience during character creation.</p><p><strong>Versatile:</strong> Once per long rest, you may add +2 to any trait roll.</p>",
            [
                AncestryFeature::new(
                    "Ambitious",
                    "Choose an additional Experience during character creation.",
                ),
                AncestryFeature::new(
                    "Versatile",
                    "Once per long rest, you may add +2 to any trait roll.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Katari",
            "<h2>Katari</h2><p>The Katari are a feline people with natural grace and hunting instincts. They possess retractable claws, enhanced senses, and a deep connection to both civilization and the wild.</p><h3>Ancestry Features</h3><p><strong>Feline Agility:</strong> You can move through difficult terrain without penalty.</p><p><strong>Predator's Senses:</strong> You can see in dim light and have advantage on tracking rolls.</p>",
            [
                AncestryFeature::new(
                    "Feline Agility",
                    "You can move through difficult terrain without penalty.",
                ),
                AncestryFeature::new(
                    "Predator's Senses",
                    "You can see in dim light and have advantage on tracking rolls.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Kobold",
            "<h2>Kobold</h2><p>Kobolds are small, draconic humanoids known for their cunning and their ability to work together in groups. They are natural tinkers and trap-makers, often compensating for individual weakness through clever teamwork.</p><h3>Ancestry Features</h3><p><strong>Pack Tactics:</strong> When an ally is within Very Close range of your target, you gain +1 to attack rolls.</p><p><strong>Tinker:</strong> You can create small mechanical devices and traps with appropriate materials.</p>",
            [
                AncestryFeature::new(
                    "Pack Tactics",
                    "When an ally is within Very Close range of your target, you gain +1 to attack rolls.",
                ),
                AncestryFeature::new(
                    "Tinker",
                    "You can create small mechanical devices and traps with appropriate materials.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Orc",
            "<h2>Orc</h2><p>Orcs are a proud warrior people with a strong tribal culture. Known for their physical prowess and passionate nature, they value strength, honor, and loyalty to their clan above all else.</p><h3>Ancestry Features</h3><p><strong>Powerful Build:</strong> You count as one size larger for determining carrying capacity.</p><p><strong>Relentless:</strong> When reduced to 0 HP, you may make one final action before falling unconscious.</p>",
            [
                AncestryFeature::new(
                    "Powerful Build",
                    "You count as one size larger for determining carrying capacity.",
                ),
                AncestryFeature::new(
                    "Relentless",
                    "When reduced to 0 HP, you may make one final action before falling unconscious.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Ribbet",
            "<h2>Ribbet</h2><p>Ribbets are amphibious frog-folk who are equally at home in water and on land. They are known for their powerful jumping ability, their loud voices, and their connection to both aquatic and terrestrial environments.</p><h3>Ancestry Features</h3><p><strong>Amphibious:</strong> You can breathe both air and water and have a swimming speed equal to your normal speed.</p><p><strong>Powerful Leap:</strong> Your jumping distance is doubled, and you take no damage from falls of 20 feet or less.</p>",
            [
                AncestryFeature::new(
                    "Amphibious",
                    "You can breathe both air and water and have a swimming speed equal to your normal speed.",
                ),
                AncestryFeature::new(
                    "Powerful Leap",
                    "Your jumping distance is doubled, and you take no damage from falls of 20 feet or less.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Simiah",
            "<h2>Simiah</h2><p>The Simiah are an ape-like people known for their intelligence, curiosity, and strong social bonds. They are natural climbers and tool-users, with a talent for solving complex problems through ingenuity.</p><h3>Ancestry Features</h3><p><strong>Brachiator:</strong> You have a climbing speed equal to your normal speed.</p><p><strong>Tool Use:</strong> You can use improvised weapons and tools with greater effectiveness, gaining +1 to rolls with improvised equipment.</p>",
            [
                AncestryFeature::new(
                    "Brachiator",
                    "You have a climbing speed equal to your normal speed.",
                ),
                AncestryFeature::new(
                    "Tool Use",
                    "You can use improvised weapons and tools with greater effectiveness, gaining +1 to rolls with improvised equipment.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Syca",
            "<h2>Syca</h2><p>Syca are humanoid fungi who grow and change throughout their lives. They have a deep connection to decay and renewal, understanding that death feeds life in an endless cycle.</p><h3>Ancestry Features</h3><p><strong>Fungal Network:</strong> You can communicate with other fungi and sense their presence within Close range.</p><p><strong>Decomposer:</strong> You can break down organic matter with a touch, useful for both destruction and creating fertile soil.</p>",
            [
                AncestryFeature::new(
                    "Fungal Network",
                    "You can communicate with other fungi and sense their presence within Close range.",
                ),
                AncestryFeature::new(
                    "Decomposer",
                    "You can break down organic matter with a touch, useful for both destruction and creating fertile soil.",
                ),
            ],
        ),
        AncestryEntry::new(
            "Tanuki",
            "<h2>Tanuki</h2><p>Tanuki are raccoon-like tricksters known for their shapeshifting abilities and mischievous nature. They are master illusionists and enjoy playing pranks, though they are ultimately good-hearted people.</p><h3>Ancestry Features</h3><p><strong>Shapeshift:</strong> You can take the form of a small animal or inanimate object for up to one hour per day.</p><p><strong>Trickster:</strong> You have advantage on rolls to deceive, hide, or perform sleight of hand.</p>",
            [
                AncestryFeature::new(
                    "Shapeshift",
                    "You can take the form of a small animal or inanimate object for up to one hour per day.",
                ),
                AncestryFeature::new(
                    "Trickster",
                    "You have advantage on rolls to deceive, hide, or perform sleight of hand.",
                ),
            ],
        ),
    ]
}
