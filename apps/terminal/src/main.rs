fn main() -> anyhow::Result<()> {
    medterms_terminal::run()
}
