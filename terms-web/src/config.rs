//! Configuração do servidor: argumentos de linha de comando com fallback para
//! variáveis de ambiente.

use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "terms-web",
    version,
    about = "Servidor HTTP do serviço Unique Terms (contrato LAPPS)"
)]
pub struct Config {
    /// Endereço de escuta do servidor
    #[arg(long, env = "TERMS_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Filtro de log no formato do `EnvFilter` (ex: "info,terms_core=debug")
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn default_of(id: &str) -> Vec<String> {
        let command = Config::command();
        let arg = command.get_arguments().find(|a| a.get_id() == id).unwrap();
        arg.get_default_values()
            .iter()
            .map(|v| v.to_string_lossy().into_owned())
            .collect()
    }

    // Lê os defaults declarados, sem depender de TERMS_BIND/RUST_LOG no ambiente
    #[test]
    fn test_config_defaults() {
        assert_eq!(default_of("bind"), ["0.0.0.0:3000"]);
        assert_eq!(default_of("log_filter"), ["info"]);
    }

    #[test]
    fn test_config_flags() {
        let config =
            Config::try_parse_from(["terms-web", "--bind", "127.0.0.1:8080", "--log-filter", "debug"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_filter, "debug");
    }
}
