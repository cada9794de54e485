use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUser;
use dioxus_free_icons::Icon;

/// Avatar diameter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "sm",
            AvatarSize::Medium => "md",
            AvatarSize::Large => "lg",
        }
    }

    fn icon_px(&self) -> u32 {
        match self {
            AvatarSize::Small => 24,
            AvatarSize::Medium => 32,
            AvatarSize::Large => 40,
        }
    }
}

/// Round placeholder avatar showing a person glyph. `solid` inverts the
/// colors for use on light headers.
#[component]
pub fn Avatar(
    #[props(default)] size: AvatarSize,
    #[props(default = false)] solid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "avatar", None, false),
        Attribute::new("data-size", size.class(), None, false),
        Attribute::new(
            "data-solid",
            if solid { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let px = size.icon_px();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            Icon::<LdUser> { icon: LdUser, width: px, height: px }
        }
    }
}
