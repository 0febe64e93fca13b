pub mod api_utils;
pub mod components;
pub mod config;
pub mod dialog;
pub mod export;
pub mod format;
pub mod icons;
pub mod modal;
pub mod notify;
pub mod page_frame;
pub mod pagination;
pub mod search;
pub mod terbilang;
