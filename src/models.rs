use image::Rgb;

/// Fill color of every icon (#007AFF).
pub const BACKGROUND: Rgb<u8> = Rgb([0x00, 0x7A, 0xFF]);
/// Label color.
pub const FOREGROUND: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// A target pixel size and the file it is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

const fn spec(size: u32, filename: &'static str) -> IconSpec {
    IconSpec { size, filename }
}

// iPad entries reuse the iPhone bitmaps where the pixel size matches.
pub const ICON_SPECS: [IconSpec; 17] = [
    spec(40, "Icon-20@2x.png"),   // iPhone 20pt @2x
    spec(60, "Icon-20@3x.png"),   // iPhone 20pt @3x
    spec(58, "Icon-29@2x.png"),   // iPhone 29pt @2x
    spec(87, "Icon-29@3x.png"),   // iPhone 29pt @3x
    spec(80, "Icon-40@2x.png"),   // iPhone 40pt @2x
    spec(120, "Icon-40@3x.png"),  // iPhone 40pt @3x
    spec(120, "Icon-60@2x.png"),  // iPhone 60pt @2x
    spec(180, "Icon-60@3x.png"),  // iPhone 60pt @3x
    spec(20, "Icon-20.png"),      // iPad 20pt @1x
    spec(40, "Icon-20@2x.png"),   // iPad 20pt @2x
    spec(29, "Icon-29.png"),      // iPad 29pt @1x
    spec(58, "Icon-29@2x.png"),   // iPad 29pt @2x
    spec(40, "Icon-40.png"),      // iPad 40pt @1x
    spec(80, "Icon-40@2x.png"),   // iPad 40pt @2x
    spec(152, "Icon-76@2x.png"),  // iPad 76pt @2x
    spec(167, "Icon-83.5@2x.png"), // iPad 83.5pt @2x
    spec(1024, "Icon-1024.png"),  // App Store
];

/// The bitmaps to render, in table order.
pub fn icon_specs() -> Vec<IconSpec> {
    ICON_SPECS.to_vec()
}
