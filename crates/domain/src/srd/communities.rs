//! The SRD community table.

use crate::entities::CommunityEntry;

/// All SRD communities, in presentation order.
pub fn communities() -> Vec<CommunityEntry> {
    vec![
        CommunityEntry::new(
            "Lorekeeper",
            "<h2>Lorekeeper</h2><p>You come from a tradition of scholars, historians, and knowledge-seekers. Whether trained in ancient libraries or taught by traveling sages, you have dedicated your life to preserving and sharing wisdom.</p>",
            "You gain +2 to rolls involving history, lore, or ancient knowledge. Once per session, you can recall a useful piece of information relevant to the current situation.",
        ),
        CommunityEntry::new(
            "Ridgelands Trader",
            "<h2>Ridgelands Trader</h2><p>You have spent your life traveling the trade routes that connect distant settlements. You know the value of goods, the ways of merchants, and how to survive in the wilderness between civilized lands.</p>",
            "You gain +2 to rolls involving commerce, appraisal, or navigation. You have contacts in trading posts and merchant guilds across the realm.",
        ),
        CommunityEntry::new(
            "Order of the Sanctum",
            "<h2>Order of the Sanctum</h2><p>You belong to a religious or philosophical order dedicated to protecting sacred places and ancient knowledge. Your training has prepared you to face supernatural threats and guard against corruption.</p>",
            "You gain +2 to rolls against supernatural creatures and magical effects. Once per long rest, you can create a blessed ward that protects an area.",
        ),
        CommunityEntry::new(
            "Underfoot Collective",
            "<h2>Underfoot Collective</h2><p>You come from a community of outcasts, refugees, and those forgotten by society. Living in the margins has taught you resourcefulness and the importance of mutual aid.</p>",
            "You gain +2 to rolls involving stealth, survival, or helping others in need. You can always find shelter and basic supplies in urban areas.",
        ),
        CommunityEntry::new(
            "Wandering Folk",
            "<h2>Wandering Folk</h2><p>Your people have no permanent home, instead traveling in caravans, ships, or nomadic groups. You have seen many lands and learned to adapt to different cultures and environments.</p>",
            "You gain +2 to rolls involving travel, cultural knowledge, or adaptation. You can communicate basic ideas with anyone, regardless of language barriers.",
        ),
        CommunityEntry::new(
            "Circle of the Spores",
            "<h2>Circle of the Spores</h2><p>You belong to a druidic circle that understands the necessity of death and decay in the natural cycle. You have learned to work with fungi, disease, and decomposition as forces of renewal.</p>",
            "You gain +2 to rolls involving nature, disease, or death magic. You can accelerate natural decay or growth processes.",
        ),
        CommunityEntry::new(
            "Covenant of the Tide",
            "<h2>Covenant of the Tide</h2><p>Your community lives by or on the sea, understanding the ocean's moods and mysteries. You are equally comfortable on deck or underwater, and you know the old stories of what lurks beneath the waves.</p>",
            "You gain +2 to rolls involving swimming, sailing, or sea lore. You can hold your breath for extended periods and have advantage in aquatic environments.",
        ),
        CommunityEntry::new(
            "Court of Howls",
            "<h2>Court of Howls</h2><p>You come from a wild community that lives close to nature and beast-kind. Whether raised by wolves, living among wild folk, or serving as a beast-speaker, you understand the primal world.</p>",
            "You gain +2 to rolls involving animals or wilderness survival. You can communicate with beasts and have advantage on rolls to track or hunt.",
        ),
        CommunityEntry::new(
            "Ember Isle Collective",
            "<h2>Ember Isle Collective</h2><p>Your community has learned to harness volcanic energy and live in harmony with elemental fire. You come from forges and workshops where metal and flame are shaped by skilled artisans.</p>",
            "You gain +2 to rolls involving crafting, fire magic, or working with metals. You have resistance to fire damage and can work with extremely hot materials.",
        ),
    ]
}
