//! Built-in sample page used when no page file is given

use super::model::Page;

const SAMPLE_PAGE: &str = r#"
title = "Velvet Leaf Tea House"

[controls]
menu_button = true
menu_overlay = true

[hours]
lines = [
    "Mon-Fri   08:00 - 18:00",
    "Saturday  09:00 - 17:00",
    "Sunday    10:00 - 16:00",
]

[[section]]
anchor = "home"
title = "Velvet Leaf"
hero = true

[[section.block]]
role = "plain"
text = """
A quiet corner for slow afternoons.
Small-batch teas, poured with patience."""
height = 60

[[section.block]]
role = "story-text"
text = """
We started with a single kettle and a
shelf of jars. The shelf grew."""
height = 40

[[section]]
anchor = "teas"
title = "Our Teas"

[[section.block]]
role = "tea-card"
text = """
Silver Needle
White tea, soft and honeyed."""
height = 30

[[section.block]]
role = "tea-card"
text = """
Iron Goddess
Oolong, roasted and floral."""
height = 30

[[section.block]]
role = "tea-card"
text = """
Smoked Pine
Lapsang, for grey mornings."""
height = 30

[[section]]
anchor = "menu"
title = "Menu"

[[section.block]]
role = "menu-card"
text = """
Pot for one ............ 4.50
Pot for two ............ 7.00
Cold brew .............. 3.50"""
height = 30

[[section.block]]
role = "menu-card"
text = """
Sesame shortbread ...... 2.50
Yuzu cake .............. 3.80"""
height = 30

[[section]]
anchor = "about"
title = "About Us"

[[section.block]]
role = "about-text"
text = """
The room used to be a bookbinder's
workshop; the benches still carry
the ink stains."""
height = 30

[[section.block]]
role = "story-image"
text = "[ photographs of the old workshop ]"
height = 50

[[section.block]]
role = "about-text"
text = """
Everything is brewed to order. If you
are in a hurry, we will find you a
seat anyway."""
height = 30

[[section]]
anchor = "visit"
title = "Find Us"

[[section.block]]
role = "plain"
text = """
14 Linden Passage
Open every day of the week."""
height = 30
"#;

impl Page {
    /// The built-in tea-house page
    pub fn sample() -> Self {
        Self::from_toml_str(SAMPLE_PAGE).expect("built-in sample page must parse")
    }
}
