use tracing_subscriber::EnvFilter;
use utilities::{input, split_command};
use vocabulary::{Config, ErrorKind, PartOfSpeech, Vocabulary, VocabularyError, Word};

mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let vocabulary = Vocabulary::new(Config::from_env())?;
    if vocabulary.config().antonym_api_key.is_none() {
        println!("BIGHUGELABS_API_KEY is not set, antonym lookups are disabled.");
    }
    if vocabulary.config().dictionary_api_key.is_none() {
        println!("WORDNIK_API_KEY is not set, part of speech lookups are disabled.");
    }

    loop {
        let Some(line) = input(">> ")? else {
            break;
        };
        if let Some((command, word)) = split_command(&line) {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                "define" | "word" => match vocabulary.word(&word).await {
                    Ok(word) => print_word(&word),
                    Err(error) => print_error(&error),
                },
                "json" => match vocabulary.word(&word).await {
                    Ok(word) => println!("{}", serde_json::to_string_pretty(&word)?),
                    Err(error) => print_error(&error),
                },
                "meanings" => print_list(vocabulary.meanings(&word).await),
                "synonyms" => print_list(vocabulary.synonyms(&word).await),
                "antonyms" => print_list(vocabulary.antonyms(&word).await),
                "examples" => print_list(vocabulary.usage_example(&word).await),
                "pos" => match vocabulary.part_of_speech(&word).await {
                    Ok(parts) if parts.is_empty() => println!("No data."),
                    Ok(parts) => print_parts(&parts, "    "),
                    Err(error) => print_error(&error),
                },
                "help" => print_help(),
                _ => {
                    println!("Unknown command {command}. Type 'help' for a list of commands.");
                }
            }
        }
    }
    Ok(())
}

fn print_help() {
    println!("define <word>     everything known about a word");
    println!("json <word>       the same, as JSON");
    println!("meanings <word>");
    println!("synonyms <word>");
    println!("antonyms <word>   needs BIGHUGELABS_API_KEY");
    println!("pos <word>        needs WORDNIK_API_KEY");
    println!("examples <word>");
    println!("quit");
}

fn print_list(result: Result<Vec<String>, VocabularyError>) {
    match result {
        Ok(items) if items.is_empty() => println!("No data."),
        Ok(items) => {
            for item in items {
                println!("    {item}");
            }
        }
        Err(error) => print_error(&error),
    }
}

fn print_parts(parts: &[PartOfSpeech], indent: &str) {
    for part in parts {
        println!("{indent}{}: {}", part.tag, part.example_usage);
    }
}

fn print_error(error: &VocabularyError) {
    match error.kind() {
        ErrorKind::Precondition => println!("{error}"),
        ErrorKind::Transport | ErrorKind::Decode => {
            println!("Couldn't complete the lookup: {error}")
        }
    }
}

fn print_word(word: &Word) {
    if word.is_empty() {
        println!("Couldn't find anything for '{}'.", word.word);
        return;
    }
    println!("Showing everything for '{}':", word.word);
    if !word.meanings.is_empty() {
        println!("    meanings:");
        for meaning in &word.meanings {
            println!("        {meaning}");
        }
    }
    if !word.part_of_speech.is_empty() {
        println!("    part of speech:");
        print_parts(&word.part_of_speech, "        ");
    }
    if !word.synonyms.is_empty() {
        println!("    synonyms: {}", word.synonyms.join(", "));
    }
    if !word.antonyms.is_empty() {
        println!("    antonyms: {}", word.antonyms.join(", "));
    }
    if !word.usage_example.is_empty() {
        println!("    examples:");
        for example in &word.usage_example {
            println!("        {example}");
        }
    }
}
