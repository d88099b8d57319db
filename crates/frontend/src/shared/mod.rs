pub mod api_utils;
pub mod components;
pub mod i18n;
pub mod icons;
pub mod navigation;
pub mod swipe;
