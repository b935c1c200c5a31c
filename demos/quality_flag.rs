use quality_type::{QualityType, QualityTypeError};

fn main() -> Result<(), QualityTypeError> {
    simple_logging::log_to_stderr(log::LevelFilter::Debug);
    log::info!("Quality Flag Example");
    log::info!("====================");
    log::info!("Pass a quality type (VBR, CBR, 0 or 1) as the first argument");

    let arg = std::env::args().nth(1).unwrap_or_else(|| "vbr".to_string());
    let quality: QualityType = match arg.parse() {
        Ok(quality) => quality,
        Err(e) => {
            log::error!("{e}");
            return Err(e);
        }
    };

    log::info!(
        "Selected {quality} ({}), raw value {}",
        quality.description(),
        quality.as_i32()
    );

    match quality {
        QualityType::Vbr => log::info!("Bitrate will follow content complexity"),
        QualityType::Cbr => log::info!("Bitrate will be held fixed"),
    }

    Ok(())
}
