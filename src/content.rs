use crate::navigation::Section;

pub const HOME_SECTIONS: [&str; 8] = [
    "Framework",
    "Voice-tone",
    "Logo",
    "Typography",
    "Iconology",
    "Color",
    "Imagery",
    "Motion",
];

pub const HOME_TILE_LABEL: &str = "Home";

pub const GRID_SPANS: [&str; 8] = [
    "span-col-1 span-row-2",
    "span-col-2 span-row-1",
    "span-col-1 span-row-1",
    "span-col-1 span-row-2",
    "span-col-1 span-row-1",
    "span-col-1 span-row-1",
    "span-col-2 span-row-1",
    "span-col-1 span-row-2",
];

const SECTION_ACCENTS: [(&str, &str); 8] = [
    ("framework", "#f87171"),
    ("voice-tone", "#60a5fa"),
    ("logo", "#34d399"),
    ("typography", "#fbbf24"),
    ("iconology", "#a78bfa"),
    ("color", "#f472b6"),
    ("imagery", "#facc15"),
    ("motion", "#4ade80"),
];

pub const DEFAULT_ACCENT: &str = "#ffffff";

pub fn home_sections() -> Vec<Section> {
    HOME_SECTIONS.iter().copied().map(Section::new).collect()
}

/// Hover accent for a home tile. Keys drop whitespace entirely, unlike slugs.
pub fn section_accent(name: &str) -> &'static str {
    let key: String = name
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    SECTION_ACCENTS
        .iter()
        .find(|(section, _)| *section == key)
        .map(|(_, accent)| *accent)
        .unwrap_or(DEFAULT_ACCENT)
}

pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

pub struct Attribute {
    pub title: &'static str,
    pub content: &'static str,
}

pub const FRAMEWORK_HERO: Hero = Hero {
    title: "Framework",
    subtitle: "Guiding principles that shape our brand identity and communications",
    image: "/images/framework.png",
};

pub const BRAND_ATTRIBUTES: [Attribute; 4] = [
    Attribute {
        title: "Reliable",
        content: "We build trust through consistency and dependability in every interaction.",
    },
    Attribute {
        title: "Human",
        content: "We approach technology with warmth and authenticity.",
    },
    Attribute {
        title: "Innovative",
        content: "We challenge conventions to create meaningful progress.",
    },
    Attribute {
        title: "Optimistic",
        content: "We believe in a better way forward and empower others to see it too.",
    },
];

pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

pub const VOICE_TONE_HERO: Hero = Hero {
    title: "Voice & Tone",
    subtitle: "Defining how we communicate and connect with our audience",
    image: "/images/voice-tone-bg.png",
};

pub const VOICE_PRINCIPLES: [Principle; 4] = [
    Principle {
        title: "Clear",
        description: "Straightforward communication that's easy to understand",
        examples: &[
            "Use simple, concise language",
            "Avoid jargon and technical terms",
            "Get to the point quickly",
        ],
    },
    Principle {
        title: "Approachable",
        description: "Friendly without being casual, professional without being stiff",
        examples: &[
            "Use contractions (we're, you'll)",
            "Avoid corporate speak",
            "Maintain a conversational tone",
        ],
    },
    Principle {
        title: "Smart",
        description: "Insightful and value-added perspective",
        examples: &[
            "Show expertise without arrogance",
            "Provide meaningful insights",
            "Focus on user benefits",
        ],
    },
    Principle {
        title: "Dynamic",
        description: "Energetic and forward-moving tone",
        examples: &[
            "Use active voice",
            "Focus on possibilities",
            "Express enthusiasm authentically",
        ],
    },
];

pub struct Showcase {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub asset: &'static str,
}

pub struct Example {
    pub description: &'static str,
    pub asset: &'static str,
}

pub const LOGO_HERO: Hero = Hero {
    title: "Logo Guidelines",
    subtitle: "Proper usage of our visual identity mark across all applications",
    image: "/images/logo-bg.png",
};

pub const LOGO_VARIATIONS: [Showcase; 4] = [
    Showcase {
        name: "Primary Logo",
        description: "Full-color version for light backgrounds",
        usage: "Primary branding, marketing materials",
        asset: "/logos/primary.svg",
    },
    Showcase {
        name: "Dark Background",
        description: "Light version for dark backgrounds",
        usage: "Dark UI surfaces, photography overlays",
        asset: "/logos/light.svg",
    },
    Showcase {
        name: "Monochrome",
        description: "Single color version",
        usage: "Grayscale applications, embossing",
        asset: "/logos/monochrome.svg",
    },
    Showcase {
        name: "Icon Only",
        description: "Simplified mark without wordmark",
        usage: "Favicons, app icons, small spaces",
        asset: "/logos/icon.svg",
    },
];

pub const LOGO_INCORRECT_USAGE: [Example; 4] = [
    Example {
        description: "Don't stretch or distort",
        asset: "/logos/incorrect/stretched.svg",
    },
    Example {
        description: "Don't rotate or skew",
        asset: "/logos/incorrect/rotated.svg",
    },
    Example {
        description: "Don't recolor improperly",
        asset: "/logos/incorrect/recolored.svg",
    },
    Example {
        description: "Don't add effects",
        asset: "/logos/incorrect/effects.svg",
    },
];

pub struct LogoBackground {
    pub label: &'static str,
    pub class: &'static str,
}

pub const LOGO_BACKGROUNDS: [LogoBackground; 3] = [
    LogoBackground {
        label: "Light background",
        class: "surface-light",
    },
    LogoBackground {
        label: "Dark background",
        class: "surface-dark",
    },
    LogoBackground {
        label: "Brand color background",
        class: "surface-brand",
    },
];

pub struct TypeStyle {
    pub name: &'static str,
    pub size_px: u16,
    pub weight: u16,
    pub line_height_px: u16,
    pub usage: &'static str,
}

impl TypeStyle {
    pub fn css(&self) -> String {
        format!(
            "font-size: {}px; font-weight: {}; line-height: {}px;",
            self.size_px, self.weight, self.line_height_px
        )
    }
}

pub struct FontPairing {
    pub name: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub usage: &'static str,
}

pub const TYPOGRAPHY_HERO: Hero = Hero {
    title: "Typography",
    subtitle: "The art of arranging type to make language visible and create hierarchy",
    image: "/images/typography-bg.png",
};

pub const TYPE_SCALE: [TypeStyle; 8] = [
    TypeStyle { name: "H1", size_px: 64, weight: 700, line_height_px: 72, usage: "Page titles" },
    TypeStyle { name: "H2", size_px: 48, weight: 700, line_height_px: 56, usage: "Section headers" },
    TypeStyle { name: "H3", size_px: 32, weight: 700, line_height_px: 40, usage: "Sub-sections" },
    TypeStyle { name: "H4", size_px: 24, weight: 600, line_height_px: 32, usage: "Card titles" },
    TypeStyle { name: "H5", size_px: 20, weight: 600, line_height_px: 28, usage: "Subheadings" },
    TypeStyle { name: "Body 1", size_px: 16, weight: 400, line_height_px: 24, usage: "Main body text" },
    TypeStyle { name: "Body 2", size_px: 14, weight: 400, line_height_px: 20, usage: "Secondary text" },
    TypeStyle { name: "Caption", size_px: 12, weight: 400, line_height_px: 16, usage: "Captions, labels" },
];

pub const FONT_PAIRINGS: [FontPairing; 2] = [
    FontPairing {
        name: "Primary Pairing",
        heading: "ABC Diatype Bold",
        body: "ABC Diatype Regular",
        usage: "Main content and headings",
    },
    FontPairing {
        name: "Secondary Pairing",
        heading: "ABC Diatype Medium",
        body: "ABC Diatype Light",
        usage: "Supporting content",
    },
];

pub struct Icon {
    pub name: &'static str,
    pub path: &'static str,
}

pub struct IconCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub icons: &'static [Icon],
}

pub const ICONOLOGY_HERO: Hero = Hero {
    title: "Iconography",
    subtitle: "Visual symbols that enhance usability and create intuitive interfaces",
    image: "/images/iconography-bg.png",
};

pub const ICON_CATEGORIES: [IconCategory; 3] = [
    IconCategory {
        name: "System Icons",
        description: "Core UI elements and actions",
        icons: &[
            Icon { name: "Home", path: "/icons/system/home.svg" },
            Icon { name: "Search", path: "/icons/system/search.svg" },
            Icon { name: "Settings", path: "/icons/system/settings.svg" },
            Icon { name: "User", path: "/icons/system/user.svg" },
            Icon { name: "Notification", path: "/icons/system/notification.svg" },
            Icon { name: "Download", path: "/icons/system/download.svg" },
        ],
    },
    IconCategory {
        name: "File Type Icons",
        description: "Representations for different file formats",
        icons: &[
            Icon { name: "PDF", path: "/icons/file-types/pdf.svg" },
            Icon { name: "Document", path: "/icons/file-types/doc.svg" },
            Icon { name: "Spreadsheet", path: "/icons/file-types/sheet.svg" },
            Icon { name: "Presentation", path: "/icons/file-types/presentation.svg" },
            Icon { name: "Image", path: "/icons/file-types/image.svg" },
            Icon { name: "Video", path: "/icons/file-types/video.svg" },
        ],
    },
    IconCategory {
        name: "Action Icons",
        description: "Common user actions and interactions",
        icons: &[
            Icon { name: "Add", path: "/icons/actions/add.svg" },
            Icon { name: "Delete", path: "/icons/actions/delete.svg" },
            Icon { name: "Edit", path: "/icons/actions/edit.svg" },
            Icon { name: "Share", path: "/icons/actions/share.svg" },
            Icon { name: "Copy", path: "/icons/actions/copy.svg" },
            Icon { name: "Move", path: "/icons/actions/move.svg" },
        ],
    },
];

pub const ICON_SIZES_PX: [u16; 4] = [16, 24, 32, 48];

pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
    pub usage: &'static str,
}

impl Swatch {
    /// Dark swatches get light text. Uses relative luminance of the sRGB hex.
    pub fn is_dark(&self) -> bool {
        parse_hex(self.hex)
            .map(|(r, g, b)| {
                let luminance =
                    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b);
                luminance < 0.4
            })
            .unwrap_or(false)
    }
}

fn linear(channel: u8) -> f64 {
    let value = f64::from(channel) / 255.0;
    if value <= 0.039_28 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub struct SwatchGroup {
    pub title: &'static str,
    pub swatches: &'static [Swatch],
}

pub const COLOR_HERO: Hero = Hero {
    title: "Color System",
    subtitle: "Strategic color usage that defines our visual identity and enhances user experience",
    image: "/images/color-bg.png",
};

pub const COLOR_PALETTE: [SwatchGroup; 3] = [
    SwatchGroup {
        title: "Primary Colors",
        swatches: &[
            Swatch { name: "Blue 50", hex: "#F0F6FF", usage: "Backgrounds, subtle accents" },
            Swatch { name: "Blue 100", hex: "#E0EDFF", usage: "Hover states, secondary elements" },
            Swatch { name: "Blue 600", hex: "#0061FF", usage: "Primary buttons, key highlights" },
            Swatch { name: "Blue 700", hex: "#0052D9", usage: "Active states, pressed buttons" },
        ],
    },
    SwatchGroup {
        title: "Secondary Colors",
        swatches: &[
            Swatch { name: "Gray 50", hex: "#F8F9FA", usage: "Light backgrounds" },
            Swatch { name: "Gray 200", hex: "#E9ECEF", usage: "Borders, dividers" },
            Swatch { name: "Gray 800", hex: "#343A40", usage: "Body text, dark elements" },
            Swatch { name: "Gray 900", hex: "#212529", usage: "Headings, dark backgrounds" },
        ],
    },
    SwatchGroup {
        title: "System Colors",
        swatches: &[
            Swatch { name: "Success", hex: "#28A745", usage: "Positive actions, completion" },
            Swatch { name: "Warning", hex: "#FFC107", usage: "Warnings, attention needed" },
            Swatch { name: "Error", hex: "#DC3545", usage: "Errors, destructive actions" },
            Swatch { name: "Info", hex: "#17A2B8", usage: "Informational messages" },
        ],
    },
];

pub const IMAGERY_HERO: Hero = Hero {
    title: "Imagery",
    subtitle: "Visual storytelling through photography and illustration",
    image: "/images/imagery-bg.jpg",
};

pub const IMAGE_STYLES: [Showcase; 4] = [
    Showcase {
        name: "Authentic",
        description: "Real people in natural environments",
        usage: "Product screens, testimonials, case studies",
        asset: "/images/imagery/authentic.jpg",
    },
    Showcase {
        name: "Conceptual",
        description: "Abstract representations of ideas",
        usage: "Marketing campaigns, feature highlights",
        asset: "/images/imagery/conceptual.jpg",
    },
    Showcase {
        name: "Lifestyle",
        description: "People using products in real life",
        usage: "Social media, advertisements",
        asset: "/images/imagery/lifestyle.jpg",
    },
    Showcase {
        name: "Technical",
        description: "Product details and interfaces",
        usage: "Documentation, tutorials",
        asset: "/images/imagery/technical.jpg",
    },
];

pub const COMPOSITION_EXAMPLES: [Attribute; 4] = [
    Attribute { title: "Rule of Thirds", content: "Key elements aligned with grid intersections" },
    Attribute { title: "Negative Space", content: "Breathing room around subjects" },
    Attribute { title: "Leading Lines", content: "Natural lines guide the eye" },
    Attribute { title: "Color Harmony", content: "Complementary brand colors" },
];

pub fn composition_asset(index: usize) -> String {
    format!("/images/imagery/composition-{}.jpg", index + 1)
}

pub const IMAGERY_DOS: [&str; 3] = [
    "Minimum 2000px on the long edge",
    "Use our color palette as reference",
    "Authentic, diverse representation",
];

pub const IMAGERY_DONTS: [&str; 3] = [
    "Avoid generic business clichés",
    "Maintain natural color balance",
    "Ensure proper resolution",
];

pub const MOTION_HERO: Hero = Hero {
    title: "Motion Design",
    subtitle: "Bringing interfaces to life with purposeful animation",
    image: "/images/motion-bg.jpg",
};

pub const MOTION_PRINCIPLES: [Showcase; 4] = [
    Showcase {
        name: "Purposeful",
        description: "Motion should enhance usability, not distract",
        usage: "Focus attention, explain relationships",
        asset: "/videos/purposeful.mp4",
    },
    Showcase {
        name: "Responsive",
        description: "Instant feedback to user actions",
        usage: "Button presses, state changes",
        asset: "/videos/responsive.mp4",
    },
    Showcase {
        name: "Natural",
        description: "Follow real-world physics",
        usage: "Transitions, object movements",
        asset: "/videos/natural.mp4",
    },
    Showcase {
        name: "Cohesive",
        description: "Consistent timing and easing",
        usage: "System-wide animations",
        asset: "/videos/cohesive.mp4",
    },
];

pub const ANIMATION_TYPES: [Principle; 3] = [
    Principle {
        title: "Micro-interactions",
        description: "Small, functional animations",
        examples: &["Button hover states", "Form field validation", "Toggle switches"],
    },
    Principle {
        title: "Transitions",
        description: "Between states or screens",
        examples: &["Page transitions", "Modal appearances", "List item reordering"],
    },
    Principle {
        title: "Feedback",
        description: "Visual response to actions",
        examples: &["Success/error states", "Loading indicators", "Drag and drop"],
    },
];

pub struct Timing {
    pub name: &'static str,
    pub duration_ms: u16,
    pub easing: &'static str,
}

pub const MOTION_TIMINGS: [Timing; 3] = [
    Timing { name: "Quick", duration_ms: 200, easing: "ease-out" },
    Timing { name: "Standard", duration_ms: 300, easing: "ease-in-out" },
    Timing { name: "Emphasis", duration_ms: 500, easing: "cubic-bezier(0.34, 1.56, 0.64, 1)" },
];

pub fn stagger_style(index: usize, step_ms: u32) -> String {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    format!("--enter-delay: {}ms;", index.saturating_mul(step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_sections_route_to_slugged_paths() {
        let paths: Vec<String> = home_sections().iter().map(Section::path).collect();
        assert_eq!(
            paths,
            vec![
                "/framework",
                "/voice-tone",
                "/logo",
                "/typography",
                "/iconology",
                "/color",
                "/imagery",
                "/motion",
            ]
        );
    }

    #[test]
    fn every_home_section_has_an_accent() {
        for name in HOME_SECTIONS {
            assert_ne!(section_accent(name), DEFAULT_ACCENT, "{name}");
        }
        assert_eq!(section_accent("Voice-tone"), "#60a5fa");
        assert_eq!(section_accent("Home"), DEFAULT_ACCENT);
    }

    #[test]
    fn accent_keys_drop_whitespace() {
        assert_eq!(section_accent("Ico nology"), "#a78bfa");
    }

    #[test]
    fn palette_hexes_parse() {
        for group in &COLOR_PALETTE {
            for swatch in group.swatches {
                assert!(parse_hex(swatch.hex).is_some(), "{}", swatch.hex);
            }
        }
        assert_eq!(parse_hex("#0061FF"), Some((0x00, 0x61, 0xff)));
        assert_eq!(parse_hex("0061FF"), None);
        assert_eq!(parse_hex("#0061F"), None);
    }

    #[test]
    fn contrast_picks_light_text_for_dark_swatches() {
        let dark = Swatch { name: "Gray 900", hex: "#212529", usage: "" };
        let light = Swatch { name: "Blue 50", hex: "#F0F6FF", usage: "" };
        assert!(dark.is_dark());
        assert!(!light.is_dark());
    }

    #[test]
    fn type_scale_descends() {
        let sizes: Vec<u16> = TYPE_SCALE.iter().map(|style| style.size_px).collect();
        assert!(sizes.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(
            TYPE_SCALE[0].css(),
            "font-size: 64px; font-weight: 700; line-height: 72px;"
        );
    }

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger_style(0, 100), "--enter-delay: 0ms;");
        assert_eq!(stagger_style(3, 100), "--enter-delay: 300ms;");
    }

    #[test]
    fn grid_spans_cover_every_home_section() {
        assert_eq!(GRID_SPANS.len(), HOME_SECTIONS.len());
        assert_eq!(composition_asset(0), "/images/imagery/composition-1.jpg");
    }
}
