use bevy::prelude::Color;

/// One showcased product: model asset, caption copy and page styling.
pub struct ShowcaseEntry {
    pub name: &'static str,
    /// Caption heading, one element per line.
    pub title: &'static [&'static str],
    pub price: &'static str,
    /// glTF scene path relative to the asset root.
    pub model_path: &'static str,
    /// Page background as sRGB components.
    pub background: [f32; 3],
    /// Vertical world position of the item's page anchor.
    pub position: f32,
    /// Uniform scale applied to the model scene.
    pub scale: f32,
}

impl ShowcaseEntry {
    pub fn background_colour(&self) -> Color {
        Color::srgb(self.background[0], self.background[1], self.background[2])
    }

    /// Background as a `#rrggbb` string for the embedding document.
    pub fn background_css(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.background[0]),
            channel(self.background[1]),
            channel(self.background[2])
        )
    }
}

/// The showcase catalog, in display order. Positions are explicit so the
/// scroll mapping never depends on list order.
pub const SHOWCASE: &[ShowcaseEntry] = &[
    ShowcaseEntry {
        name: "tesla_model_s",
        title: &["Tesla", "Model S"],
        price: "$74,990",
        model_path: "models/tesla_model_s/scene.gltf",
        background: [0.643, 0.651, 0.651],
        position: 250.0,
        scale: 0.3,
    },
    ShowcaseEntry {
        name: "bmw_i8",
        title: &["BMW i8"],
        price: "$147,500",
        model_path: "models/bmw_i8/scene.gltf",
        background: [0.0, 0.804, 1.0],
        position: 0.0,
        scale: 0.3,
    },
    ShowcaseEntry {
        name: "lamborghini_terzo",
        title: &["Lamborghini", "Terzo"],
        price: "$2,500,000",
        model_path: "models/lamborghini_terzo/scene.gltf",
        background: [0.988, 0.675, 0.008],
        position: -250.0,
        scale: 25.0,
    },
    ShowcaseEntry {
        name: "audi_r8",
        title: &["Audi R8"],
        price: "$169,900",
        model_path: "models/audi_r8/scene.gltf",
        background: [0.0, 0.0, 0.0],
        position: -500.0,
        scale: 20.0,
    },
    ShowcaseEntry {
        name: "tesla_cybertruck",
        title: &["Tesla Cybertruck"],
        price: "$39,900",
        model_path: "models/tesla_cybertruck/scene.gltf",
        background: [0.753, 0.753, 0.753],
        position: -750.0,
        scale: 20.0,
    },
];

pub fn get_entry_by_name(name: &str) -> Option<&'static ShowcaseEntry> {
    SHOWCASE.iter().find(|entry| entry.name == name)
}
