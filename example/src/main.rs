fn main() {
    if let Err(err) = simple_slider_example::run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
