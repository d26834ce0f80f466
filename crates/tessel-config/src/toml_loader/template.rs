//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Tessel Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[border]
# Shrink every tiled window by width + offset on each edge.
# enabled = true
# width = 3.0            # 0-20
# offset = -1.0          # -10-10

[floating]
# Placeholder size for a pending floating placement.
# width = 800.0          # 100-10000
# height = 500.0         # 100-10000

[layout]
# gap = 10.0             # 0-100
# padding = 10.0         # 0-200
# stack_bar_height = 0.0 # 0-100

[sync]
# Trailing delay that coalesces bursts of retile triggers.
# coalesce_ms = 20       # 0-1000

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
