//! Document upload commands: match and generate.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{ArgGroup, Args};

use docontology::{GenerateRequest, GenerateSource};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// PDF or JPEG file to classify
    pub file: PathBuf,

    /// Customer ID for private schema matching
    #[arg(long)]
    pub customer_id: Option<String>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "text"])))]
#[command(after_help = "\
Examples:
  schemactl schemas generate -f invoice.pdf -t Invoice -c PT
  schemactl schemas generate -f invoice.jpg -t Invoice -c US --use-ocr false
  schemactl schemas generate --text \"Invoice Number: 12345\" -t Invoice -c PT")]
pub struct GenerateArgs {
    /// Path to a PDF or JPEG file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Raw text content (alternative to --file)
    #[arg(long)]
    pub text: Option<String>,

    /// Doc type code
    #[arg(short = 't', long)]
    pub doc_type: String,

    /// Country code
    #[arg(short, long)]
    pub country: String,

    /// Run OCR on the file before generation
    #[arg(long, value_name = "BOOL", default_value_t = true, action = clap::ArgAction::Set)]
    pub use_ocr: bool,
}

impl GenerateArgs {
    fn source(&self) -> Option<GenerateSource> {
        match (&self.file, &self.text) {
            (Some(path), _) => Some(GenerateSource::File {
                path: path.clone(),
                use_ocr: self.use_ocr,
            }),
            (None, Some(text)) => Some(GenerateSource::text(text.as_str())),
            (None, None) => None,
        }
    }
}

pub async fn run_match(args: MatchArgs, ctx: &Context) -> Result<()> {
    let result = ctx
        .registry
        .match_schema(&args.file, args.customer_id.as_deref())
        .await
        .with_context(|| format!("Failed to match {}", args.file.display()))?;

    output::emit(ctx.output, &result, |result| {
        let c = &result.classification;
        println!("Classification:");
        output::fields(&[
            ("  Doc Type", c.doc_type.clone()),
            ("  Country", c.country.clone()),
            ("  Pages", format!("{:?}", c.pages)),
        ]);
        println!();

        match &result.schema {
            Some(s) => {
                println!("Matched Schema:");
                output::fields(&[
                    ("  ID", s.public_id.clone()),
                    ("  Version ID", s.public_version_id.clone()),
                    ("  Name", s.name.clone()),
                    ("  Type", s.schema_type.to_string()),
                ]);
            }
            None => println!("No matching schema found"),
        }
    })
}

pub async fn run_generate(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let source = args
        .source()
        .context("either --file or --text must be provided")?;
    let request = GenerateRequest::new(&args.doc_type, &args.country, source);

    let result = ctx
        .registry
        .generate_schema(&request)
        .await
        .with_context(|| format!("Failed to generate schema for {}/{}", args.doc_type, args.country))?;

    output::emit(ctx.output, &result, |result| {
        output::fields(&[
            ("Doc Type", result.doc_type.clone()),
            ("Country", result.country.clone()),
        ]);
        println!();
        println!("Generated Schema:");
        match output::indented_json(&result.schema.content) {
            Ok(content) => println!("{content}"),
            Err(err) => output::error(&format!("Failed to render content: {err}")),
        }
    })
}
