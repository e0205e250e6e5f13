//! Spec key synonyms per attribute (English and Finnish), lower-case.
//!
//! A spec entry is considered for an attribute when its lower-cased key
//! contains any of the listed substrings. Where two lists are given, the key
//! must hit both.

pub const CPU_SOCKET: &[&str] = &["socket", "suoritinkanta"];
pub const MOTHERBOARD_SOCKET: &[&str] = &["socket", "prosessorikanta", "suoritinkanta"];

pub const MOTHERBOARD_MEMORY_TYPE: &[&str] = &["muistityyp", "memory type", "supported memory"];
pub const CPU_MEMORY_TYPE: &[&str] = &["muistityyp", "memory type", "supported memory"];

pub const MEMORY_SLOTS: &[&str] = &["muistipaik", "memory slot", "dimm slot", "ram slot"];
pub const DIMM: &str = "dimm";
pub const SO_DIMM: &str = "so-dimm";

pub const GPU_LENGTH: &[&str] = &["pituus", "length"];
pub const CASE_GPU_SUBJECT: &[&str] = &["gpu", "näytönohjai", "graphics card", "vga"];
pub const CASE_GPU_LIMIT: &[&str] = &["clearance", "max", "maks", "pituus", "length"];

pub const COOLER_SOCKETS: &[&str] = &["compatibility", "yhteensopiv", "socket", "kanta", "kannat"];
pub const COOLER_HEIGHT: &[&str] = &["korkeus", "height"];
pub const CASE_COOLER_SUBJECT: &[&str] = &["cooler", "jäähdyt"];
pub const CASE_COOLER_LIMIT: &[&str] = &["clearance", "max", "maks", "korkeus", "height"];
pub const CPU_BUNDLED_COOLER: &[&str] = &["cooler", "jäähdyt"];

pub const MOTHERBOARD_FORM_FACTOR: &[&str] = &["form factor", "muoto", "koko"];
pub const CASE_FORM_FACTORS: &[&str] = &["form factor", "emolevy", "tuetut", "motherboard"];

pub const PSU_WATTAGE: &[&str] = &["teho", "power", "watt"];
pub const TDP: &[&str] = &["tdp", "tehokkuusluokka"];
pub const POWER_LIKE: &[&str] = &["teho", "power"];
/// Keys describing a power supply's output rather than a component's draw.
pub const PSU_OUTPUT: &[&str] = &["virtalähde", "supply"];
pub const GPU_POWER: &[&str] = &["tdp", "tgp", "tbp", "power consumption", "tehonkulutus"];
