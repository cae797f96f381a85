//! Normalized key codes.
//!
//! Code 0 is the "no mapping" sentinel. Unmapped ASCII digits and
//! lowercase letters translate to themselves, so printable codes stay
//! below 0x80 and the named keys start at 0x100 where the fallback range
//! can never land.

pub const NONE: u16 = 0;

pub const UP: u16 = 0x0100;
pub const DOWN: u16 = 0x0101;
pub const LEFT: u16 = 0x0102;
pub const RIGHT: u16 = 0x0103;
pub const ENTER: u16 = 0x0104;
pub const ESCAPE: u16 = 0x0105;
pub const SPACE: u16 = 0x0106;
pub const TAB: u16 = 0x0107;
pub const BACKSPACE: u16 = 0x0108;
pub const INSERT: u16 = 0x0109;
pub const DELETE: u16 = 0x010A;
pub const HOME: u16 = 0x010B;
pub const END: u16 = 0x010C;
pub const PAGE_UP: u16 = 0x010D;
pub const PAGE_DOWN: u16 = 0x010E;
pub const PAUSE: u16 = 0x010F;

pub const SHIFT: u16 = 0x0110;
pub const CTRL: u16 = 0x0111;
pub const ALT: u16 = 0x0112;

pub const F1: u16 = 0x0120;
pub const F2: u16 = 0x0121;
pub const F3: u16 = 0x0122;
pub const F4: u16 = 0x0123;
pub const F5: u16 = 0x0124;
pub const F6: u16 = 0x0125;
pub const F7: u16 = 0x0126;
pub const F8: u16 = 0x0127;
pub const F9: u16 = 0x0128;
pub const F10: u16 = 0x0129;
pub const F11: u16 = 0x012A;
pub const F12: u16 = 0x012B;
