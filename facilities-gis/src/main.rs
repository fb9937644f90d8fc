use clap::Parser;
use facilities_gis::app::FacilitiesApp;

fn main() {
    env_logger::init();
    let args = FacilitiesApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running facilities_gis: {e}");
            std::process::exit(1);
        }
    }
}
