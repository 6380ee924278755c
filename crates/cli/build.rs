use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("restyle")
        .version("1.0.0")
        .author("Restyle Contributors")
        .about("Rewrite articles in a requested style")
        .arg(clap::arg!(<INPUT> "File to rewrite (.txt, .md, .docx, .pdf) or article URL"))
        .arg(
            clap::arg!(-s --style <STYLE> "Description of the desired writing style")
                .value_name("STYLE")
                .required(true),
        )
        .arg(clap::arg!(--api_key <KEY> "Backend API key (default: OPENAI_API_KEY)").value_name("KEY"))
        .arg(
            clap::arg!(-m --model <MODEL> "Generation model")
                .value_name("MODEL")
                .default_value("gpt-3.5-turbo")
                .value_parser(["gpt-3.5-turbo", "gpt-4", "gpt-4-turbo-preview"]),
        )
        .arg(clap::arg!(--max_tokens <NUM> "Maximum generated tokens (100-4000)").default_value("2000"))
        .arg(clap::arg!(--temperature <NUM> "Sampling temperature (0.0-1.0)").default_value("0.7"))
        .arg(clap::arg!(--preserve_length "Ask the model to keep the original length (advisory)"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds for URL fetching").default_value("10"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for URL fetching").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "restyle", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "restyle", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "restyle", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "restyle", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
