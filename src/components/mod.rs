pub mod depth_text;
pub mod glow_capture;
pub mod lead_modal;
pub mod reveal;
