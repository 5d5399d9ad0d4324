use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{info, warn};

use crate::{
    app::{get_config_dir, init_config, Config},
    directory::{Directory, HttpDirectory, RecordId, Route, Stop},
    resolver::Gazetteer,
};

use super::Commands;

/// Handle CLI subcommands. Returns `false` when the command needs the
/// resolver (chat, batch) and must be handled by the runtime.
///
/// The directory client is only built for commands that talk to it.
pub async fn handle_command(command: &Commands, config: &Config) -> Result<bool> {
    match command {
        Commands::Init => {
            println!("Inicializando la configuración de Rutabot...");
            init_config()?;
            println!("Configuración lista.");
            Ok(true)
        }
        Commands::Routes { region } => {
            let directory = connect_directory(config)?;
            let gazetteer = Gazetteer::from_config(&config.gazetteer);
            list_routes(&directory, &gazetteer, region.as_deref()).await?;
            Ok(true)
        }
        Commands::Stops { route } => {
            // FromStr for RecordId is infallible
            let route_id: RecordId = route.parse().unwrap_or_else(|e| match e {});
            let directory = connect_directory(config)?;
            list_stops(&directory, route_id).await?;
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
        Commands::Status => {
            let directory = connect_directory(config)?;
            show_status(config, &directory).await;
            Ok(true)
        }
        Commands::Chat | Commands::Batch { .. } => Ok(false),
    }
}

/// Build the directory client, warning when requests will go out unauthenticated
pub fn connect_directory(config: &Config) -> Result<HttpDirectory> {
    let directory = HttpDirectory::from_config(&config.directory)
        .context("Failed to create directory client")?;
    info!(
        base_url = directory.base_url(),
        authenticated = directory.has_token(),
        "directory client ready"
    );
    if !directory.has_token() {
        warn!("no directory credential configured; requests are sent unauthenticated");
    }
    Ok(directory)
}

/// List routes for a region, canonicalizing known city names
pub async fn list_routes(
    directory: &impl Directory,
    gazetteer: &Gazetteer,
    region: Option<&str>,
) -> Result<()> {
    let region = region.map(|r| {
        gazetteer
            .lookup(r)
            .map(|city| city.name().to_string())
            .unwrap_or_else(|| r.to_string())
    });

    let routes = directory
        .list_routes_by_region(region.clone())
        .await
        .context("No se pudieron listar las rutas")?;

    match &region {
        Some(region) => println!("Rutas en {}:", region.bold()),
        None => println!("Rutas:"),
    }
    if routes.is_empty() {
        println!("  (ninguna)");
    }
    for route in &routes {
        println!("  • {}", format_route(route));
    }
    Ok(())
}

/// List the stops of a route
pub async fn list_stops(directory: &impl Directory, route_id: RecordId) -> Result<()> {
    let stops = directory
        .list_stops_by_route(route_id.clone())
        .await
        .context("No se pudieron listar las paradas")?;

    println!("Paradas de la ruta {}:", route_id.to_string().bold());
    if stops.is_empty() {
        println!("  (ninguna)");
    }
    for stop in &stops {
        println!("  • {}", format_stop(stop));
    }
    Ok(())
}

fn format_route(route: &Route) -> String {
    let name = route.long_name.as_deref().unwrap_or("(sin nombre)");
    let mut line = format!("[{}] {}", route.id, name.green());
    if let Some(short_name) = &route.short_name {
        line.push_str(&format!(" ({})", short_name));
    }
    if let Some(region) = &route.region {
        line.push_str(&format!(" - {}", region));
    }
    line
}

fn format_stop(stop: &Stop) -> String {
    match &stop.hour {
        Some(hour) if !hour.is_empty() => format!("{} {}", stop.name.green(), hour.dimmed()),
        _ => stop.name.green().to_string(),
    }
}

/// Show version information
pub fn show_version() {
    println!("Rutabot v{}", env!("CARGO_PKG_VERSION"));
    println!("   Rutas, horarios y paradas, preguntados en español");
}

/// Show status of the directory and local configuration
async fn show_status(config: &Config, directory: &HttpDirectory) {
    println!("Estado de Rutabot:");
    println!();

    match directory.ping().await {
        Ok(message) => println!(
            "  [OK] Directorio: {} ({})",
            directory.base_url(),
            message
        ),
        Err(e) => println!("  [ERROR] Directorio: {} ({})", directory.base_url(), e),
    }

    if directory.has_token() {
        println!("  [OK] Credencial: configurada");
    } else {
        println!(
            "  [AVISO] Credencial: no configurada (usá --token o {})",
            config.directory.token_env
        );
    }

    match get_config_dir() {
        Ok(dir) if dir.join("config.toml").exists() => {
            println!("  [OK] Configuración: {}", dir.join("config.toml").display())
        }
        _ => println!("  [AVISO] Configuración: no encontrada (valores por defecto)"),
    }

    println!(
        "  [OK] Ciudades: {}, tiempo límite {} ms",
        config.gazetteer.cities.len(),
        config.directory.timeout_ms
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockDirectory;
    use crate::utils::DirectoryError;
    use mockall::predicate::eq;

    #[test]
    fn test_format_route_includes_optional_fields() {
        colored::control::set_override(false);
        let route = Route {
            short_name: Some("110".to_string()),
            region: Some("Managua".to_string()),
            ..Route::new(7, "Managua - León")
        };
        assert_eq!(format_route(&route), "[7] Managua - León (110) - Managua");
        assert_eq!(format_route(&Route::new(1, "Ruta 1")), "[1] Ruta 1");
    }

    #[test]
    fn test_format_route_without_name() {
        colored::control::set_override(false);
        let route = Route {
            long_name: None,
            ..Route::new(4, "")
        };
        assert_eq!(format_route(&route), "[4] (sin nombre)");
    }

    #[tokio::test]
    async fn test_offline_commands_never_build_a_client() {
        // An unusable URL would fail client construction
        let mut config = Config::default();
        config.directory.base_url = "not a url".to_string();

        assert!(handle_command(&Commands::Version, &config).await.unwrap());
        assert!(!handle_command(&Commands::Chat, &config).await.unwrap());
        assert!(connect_directory(&config).is_err());

        let err = handle_command(&Commands::Stops { route: "1".to_string() }, &config)
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create directory client"));
    }

    #[test]
    fn test_format_stop_with_and_without_hour() {
        colored::control::set_override(false);
        assert_eq!(format_stop(&Stop::new("Parada Central", Some("7:00"))), "Parada Central 7:00");
        assert_eq!(format_stop(&Stop::new("Parada Sur", None)), "Parada Sur");
        assert_eq!(format_stop(&Stop::new("Parada Sur", Some(""))), "Parada Sur");
    }

    #[tokio::test]
    async fn test_list_routes_canonicalizes_region() {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_routes_by_region()
            .with(eq(Some("León".to_string())))
            .times(1)
            .returning(|_| Ok(vec![Route::new(2, "Ruta 2")]));

        list_routes(&directory, &Gazetteer::default(), Some("leon"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_routes_passes_unknown_region_through() {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_routes_by_region()
            .with(eq(Some("Ocotal".to_string())))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        list_routes(&directory, &Gazetteer::default(), Some("Ocotal"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_stops_surfaces_directory_errors() {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_stops_by_route()
            .with(eq(RecordId::Numeric(3)))
            .returning(|_| Err(DirectoryError::Transport("connection refused".to_string())));

        let err = list_stops(&directory, RecordId::Numeric(3)).await.unwrap_err();
        assert!(format!("{:#}", err).contains("connection refused"));
    }
}
