use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use tera::Tera;

use adboard::assets::FsAssetStore;
use adboard::db::establish_connection_pool;
use adboard::models::config::ServerConfig;
use adboard::repository::DieselRepository;
use adboard::routes::ads::{all_ads, index, search, submit};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(io::Error::other)?
        .try_deserialize()
        .map_err(io::Error::other)?;

    let pool = establish_connection_pool(&settings.database_url).map_err(io::Error::other)?;
    let repo = DieselRepository::new(pool);

    let assets = FsAssetStore::new(&settings.media_root, &settings.media_url_prefix);
    assets.ensure_root().map_err(io::Error::other)?;

    let tera = Tera::new("templates/**/*.html").map_err(io::Error::other)?;

    let bind_address = settings.bind_address.clone();
    log::info!("Starting ad board server on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(assets.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(index)
            .service(all_ads)
            .service(search)
            .service(submit)
            .service(actix_files::Files::new(
                &settings.media_url_prefix,
                &settings.media_root,
            ))
    })
    .bind(bind_address)?
    .run()
    .await
}
