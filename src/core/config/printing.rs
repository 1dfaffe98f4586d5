use crate::core::config::data::Config;
use crate::core::config::defaults::RuntimeOverrides;

impl Config {
    pub fn print_all(&self) {
        let endpoint = self.resolve_endpoint(&RuntimeOverrides::default());
        let sampling = self.sampling_settings();
        let countdown = self.countdown();

        println!("Current configuration:");
        println!("  mode: {}", endpoint.mode);
        println!("  endpoint: {}", endpoint.url);
        match &self.proxy_url {
            Some(url) => println!("  proxy-url: {url}"),
            None => println!("  proxy-url: (unset)"),
        }
        match &self.hosted_url {
            Some(url) => println!("  hosted-url: {url}"),
            None => println!("  hosted-url: (unset)"),
        }
        println!("  token-env: {}", endpoint.token_env);
        println!("  system-prompt: {}", sampling.system_prompt);
        println!("  max-tokens: {}", sampling.max_tokens);
        println!("  temperature: {}", sampling.temperature);
        println!("  top-p: {}", sampling.top_p);
        println!("  timeout: {}s", endpoint.timeout.as_secs());
        println!("  launch-start: {}", countdown.start());
        println!("  launch-date: {}", countdown.target());
    }
}
