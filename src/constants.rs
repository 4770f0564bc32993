pub const TRANSFORM_WINDOW_SIZE: [f32; 2] = [1120.0, 720.0]; // [width, height]
pub const FUNCTION_WINDOW_SIZE: [f32; 2] = [900.0, 720.0];

pub const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(32, 35, 38);

pub const MAGNITUDE_COLOR: egui::Color32 = egui::Color32::from_rgb(104, 140, 56);
pub const PHASE_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 102, 140);
pub const CURVE_COLOR: egui::Color32 = egui::Color32::from_rgb(140, 107, 54);

pub const DEFAULT_SOURCE: &str = "exp(I*0.1*x)";
pub const DEFAULT_KERNEL: &str = "besselj(0, alpha*x*ksi)*x";
pub const DEFAULT_ALPHA: &str = "1.0";
pub const DEFAULT_X_START: &str = "1.0";
pub const DEFAULT_X_END: &str = "5.0";
pub const DEFAULT_X_SAMPLES: &str = "1000";
pub const DEFAULT_KSI_START: &str = "0.0";
pub const DEFAULT_KSI_END: &str = "3.0";
pub const DEFAULT_KSI_SAMPLES: &str = "1000";

pub const DEFAULT_INTERVAL: &str = "-10,10";
pub const DEFAULT_CURVE_SAMPLES: &str = "200";
