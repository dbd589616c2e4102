mod ffprobe_info;
mod filename_parser;
mod formatter;
mod path_validator;
mod timestamp;

pub use ffprobe_info::{
    DEFAULT_FFPROBE_PROGRAM, FfprobeProber, MetadataProber, ProbeResult, parse_probe_output,
};
pub use filename_parser::{CANONICAL_DIR, ParsedName, parse_file_name};
pub use formatter::{format_duration, format_size};
pub use path_validator::validate_directory_exists;
pub use timestamp::{
    TIMESTAMP_LAYOUT, TOKYO_OFFSET_SECONDS, format_label, parse_tokyo_timestamp, tokyo,
};
