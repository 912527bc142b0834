// ── Include guards ────────────────────────────────────────────────────────

/// Derives the include-guard macro name for an include path.
///
/// Each ASCII alphanumeric character is upper-cased; everything else
/// (separators, dots, spaces) becomes `_`; the result is wrapped in a leading
/// and trailing `_`. `"path/to/file.glsl"` ⇒ `_PATH_TO_FILE_GLSL_`.
///
/// Deterministic but not injective: paths differing only by case or separator
/// style collide. Accepted limitation.
pub fn guard_name(path: &str) -> String {
    let mut name = String::with_capacity(path.len() + 2);
    name.push('_');
    for c in path.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_uppercase());
        } else {
            name.push('_');
        }
    }
    name.push('_');
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_filename() {
        assert_eq!(guard_name("common.glsl"), "_COMMON_GLSL_");
    }

    #[test]
    fn nested_path() {
        assert_eq!(guard_name("path/to/file.glsl"), "_PATH_TO_FILE_GLSL_");
    }

    #[test]
    fn backslash_separator() {
        assert_eq!(guard_name("lib\\noise.glsl"), "_LIB_NOISE_GLSL_");
    }

    #[test]
    fn non_ascii_maps_to_underscore() {
        assert_eq!(guard_name("señal.glsl"), "_SE_AL_GLSL_");
    }

    #[test]
    fn case_collision_is_accepted() {
        assert_eq!(guard_name("Common.glsl"), guard_name("common.glsl"));
    }
}
