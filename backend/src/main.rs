use backend::{assets::extract_bundle, build_rocket};
use shuttle_runtime::CustomError;
use tracing::info;

#[shuttle_runtime::main]
async fn rocket() -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting SamosaTech site");

    let static_root = extract_bundle().map_err(CustomError::new)?;
    info!("📦 Static bundle extracted to {}", static_root.display());

    Ok(build_rocket(static_root).into())
}
