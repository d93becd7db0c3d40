fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let lib = embedded_shaders::load(|path, content| {
        log::debug!("Registered {path} ({} bytes)", content.len());
    });

    let mut names: Vec<_> = lib.shader_names().collect();
    names.sort_unstable();
    for name in names {
        match embedded_shaders::shader_source_pair(&lib, name) {
            Some((vertex, fragment)) => log::info!(
                "{name}: vertex {} bytes, fragment {} bytes",
                vertex.len(),
                fragment.len()
            ),
            None => log::error!("{name}: sources missing from the library"),
        }
    }
}
