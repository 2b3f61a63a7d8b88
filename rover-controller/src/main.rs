mod communication_interfaces;
mod config;
mod output;
mod shared_drive;

use std::sync::{Arc, Mutex};

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::nvs::EspDefaultNvsPartition;

use crate::communication_interfaces::http_control::ControlServer;
use crate::communication_interfaces::wifi::connect_station;
use crate::config::constants::HTTP_SERVER_PORT;
use crate::output::build_actuator;
use crate::shared_drive::SharedDrive;

fn main() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("Booting");

    let mut peripherals = Peripherals::take().unwrap();
    let sysloop = EspSystemEventLoop::take().unwrap();
    let nvs = EspDefaultNvsPartition::take().unwrap();

    let actuator = build_actuator(&mut peripherals).unwrap();

    // Outputs must sit at defined levels before the first request arrives.
    let mut drive = SharedDrive::new(actuator);
    drive.prime();
    let drive = Arc::new(Mutex::new(drive));

    let _wifi = connect_station(peripherals.modem, sysloop, nvs).unwrap();

    let _server = ControlServer::new(HTTP_SERVER_PORT, drive).unwrap();
    log::info!("HTTP control server started");

    loop {
        FreeRtos::delay_ms(1000);
    }
}
