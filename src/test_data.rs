use crate::post::Post;
use crate::text_utils::parse_date;

pub const POST_DATA: &str = "---
title: What I learned after 20+ years of software development
date: 2022-04-02
tags:
  - career
  - engineering
excerpt: A list of what I try to do myself.
coverImage: https://example.com/cover.png
---
How to be a great software engineer?

Someone asked me this question today and I didn’t have an answer. After thinking for a while, I came up with a list of what I try to do myself.

## Non technical

### Have a honest image of yourself

You finished university and learned a lot. You solved many hard problems.
";

pub const TYPESCRIPT_POST: &str = "---
title: TypeScript开发最佳实践
date: 2024-01-10
tags: [TypeScript, JavaScript, Best Practices]
excerpt: 分享在大型项目中使用TypeScript的经验
---
# TypeScript开发最佳实践

TypeScript为JavaScript带来了类型安全。
";

pub const REACT_POST: &str = "---
title: React Hooks深度解析
date: 2024-05-01
tags: [React, JavaScript]
---
React Hooks改变了我们编写React组件的方式。
";

pub const RUST_POST: &str = "---
title: Ownership in practice
date: 2023-12-01
tags: [Rust]
cover: https://example.com/rust.png
---
Borrowing rules, lifetimes and a few patterns that make them easy.
";

/// `n` space separated words.
pub fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

/// Post with only the fields queries look at filled in.
pub fn post(slug: &str, date: &str, tags: &[&str]) -> Post {
    Post {
        slug: slug.to_string(),
        title: slug.to_string(),
        excerpt: String::new(),
        content: String::new(),
        date: parse_date(date).unwrap(),
        read_time: 1,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        cover_image: None,
    }
}
