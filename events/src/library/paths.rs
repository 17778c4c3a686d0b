use std::ffi::OsStr;
use std::path::PathBuf;

/// The environment variable listing SDL2 library files to try before the standard names.
pub const SDL2_LIBRARY_VAR: &str = "SDL2_LIBRARY";

/// Returns every SDL2 library location [`SdlLibrary::load`](super::SdlLibrary::load) tries, in
/// order.
///
/// Note that this function also takes the `SDL2_LIBRARY` environment variable into
/// consideration.
pub fn standard_sdl2_paths() -> Vec<PathBuf> {
    sdl2_paths_with_override(std::env::var_os(SDL2_LIBRARY_VAR).as_deref())
}

pub(crate) fn sdl2_paths_with_override(env_var: Option<&OsStr>) -> Vec<PathBuf> {
    let mut paths = vec![];

    // Standard env variable override.
    if let Some(env_var) = env_var {
        paths.extend(std::env::split_paths(env_var).filter(|p| !p.as_os_str().is_empty()))
    }

    // On Windows
    #[cfg(target_os = "windows")]
    {
        paths.push("SDL2.dll".into());
    }

    // On macOS
    #[cfg(target_os = "macos")]
    {
        paths.push("libSDL2-2.0.0.dylib".into());
        paths.push("libSDL2.dylib".into());
        paths.push("/Library/Frameworks/SDL2.framework/SDL2".into());
    }

    // On Linux (and other UNIXes)
    #[cfg(all(target_family = "unix", not(target_os = "macos")))]
    {
        paths.push("libSDL2-2.0.so.0".into());
        paths.push("libSDL2-2.0.so".into());
        paths.push("libSDL2.so".into());
    }

    paths
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn env_var_paths_come_first() {
        let env_var =
            std::env::join_paths(["/opt/sdl/libSDL2.so", "/usr/local/lib/SDL2.dll"]).unwrap();
        let paths = sdl2_paths_with_override(Some(&env_var));

        assert_eq!(paths[0], PathBuf::from("/opt/sdl/libSDL2.so"));
        assert_eq!(paths[1], PathBuf::from("/usr/local/lib/SDL2.dll"));
        assert_eq!(paths.len(), sdl2_paths_with_override(None).len() + 2);
    }

    #[test]
    fn empty_env_var_entries_are_skipped() {
        let paths = sdl2_paths_with_override(Some(OsStr::new("")));
        assert_eq!(paths, sdl2_paths_with_override(None));
    }
}
