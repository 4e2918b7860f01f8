use crate::api::SkillTree;
use crate::cli::RenderArgs;
use crate::fs::{FileSystem, default_fs};
use crate::style;

pub fn cmd_render(args: RenderArgs) -> i32 {
    cmd_render_with_fs(&args, default_fs())
}

pub fn cmd_render_with_fs(args: &RenderArgs, fs: &dyn FileSystem) -> i32 {
    if !fs.exists(&args.path) {
        style::error(&format!("Skill file not found: {}", style::path(&args.path)));
        style::hint("run `skilltree init` to create a starter Skills.yml");
        return 1;
    }

    let tree = match SkillTree::load_with_fs(&args.path, fs) {
        Ok(tree) => tree,
        Err(e) => {
            style::error(&e.to_string());
            return 1;
        }
    };

    if !args.quiet {
        style::header(&format!("Skill tree from {}", args.path.display()));
        println!("{}\n", tree);
    }

    if let Err(e) = tree.save_with_fs(&args.output, fs) {
        style::error(&format!("Failed to write {}: {}", args.output.display(), e));
        return 1;
    }

    if !args.quiet {
        let data = tree.graph_data();
        println!("{}", style::metric("categories", data.metadata.categories));
        println!("{}", style::metric("skills", data.metadata.skills));
        println!("{}", style::metric("edges", data.metadata.edges));
    }
    style::success(&format!("Skill tree written to: {}", style::path(&args.output)));

    if args.open {
        if let Err(e) = open::that(&args.output) {
            style::warning(&format!("Could not open browser: {}", e));
        }
    }

    0
}
