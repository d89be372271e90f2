fn main() -> anyhow::Result<()> {
    screenplay_dataset::run()
}
