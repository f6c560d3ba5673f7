//! 対話シェル
//!
//! コンソール入出力とメニュー定義

pub mod console;
pub mod menu;

pub use console::Console;
pub use menu::MenuChoice;
