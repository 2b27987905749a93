use crate::books::domain::model::BookRecord;

// Fixed tag every shared book article carries, ahead of the book's own tags.
pub(crate) const SHARE_TAG: &str = "书单";

const TITLE_PREFIX: &str = ":books: 《";
const TITLE_SUFFIX: &str = "》纸质实体书免费送啦！";

// Static closing block describing the sharing program; not derived from the
// book record.
const FOOTER: &str = "## 关于『书单』\n\
    \n\
    书单是黑客派社区的一个纸质书共享活动，所有书均来自捐赠，原则上当前的书籍持有者有义务将书寄送给需要的会员。我们鼓励你在书籍上**留下笔迹**，任何信息都行，让其他人可以看到一些有意思的内容也是蛮不错的 :sweat_smile: \n\
    \n\
    ### 共享意味着什么\n\
    \n\
    一旦你共享了一本书，就会使用你的社区账号自动发一篇书籍共享帖，这意味着你做了一个**承诺**：将书送到需要的人手中。如果有同城的书籍需求者回帖，就面交吧！\n\
    \n\
    ### 如何参与\n\
    \n\
    1. 使用微信扫描如下二维码，进入黑客派社区小程序\n\
    \u{20}\u{20}\u{20}\u{20}![3c04bd33b54a493aa97107a94a1ae706.png](https://img.hacpai.com/file/2017/1/3c04bd33b54a493aa97107a94a1ae706.png) \n\
    2. 按照小程序的指引开始即可\n\
    \n\
    ### 一点思考\n\
    \n\
    类似共享书籍的事情有很多人做过，比如：\n\
    \n\
    * 摆摆书架\n\
    * 青番茄\n\
    * 书巢\n\
    * 丢书大作战\n\
    * 很多社区的书籍交换\n\
    \n\
    大家的出发点都是想让这个世界变得更好。黑客派的『书单』将作为长期活动持续下去，大家随时都能参与进来，让你我的生活变得更丰富有趣！";

// Article metadata and Markdown body derived from one book record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Composition {
    pub title: String,
    pub tags: String,
    pub content: String,
}

// Deterministic, side-effect-free transform of a book record into the shared
// article. Section order and the omission rules (translator block only when
// translators exist, series bullet only when non-blank) are part of the
// contract; everything else is emitted even when blank.
pub(crate) fn compose(book: &BookRecord) -> Composition {
    Composition {
        title: format!("{}{}{}", TITLE_PREFIX, book.title, TITLE_SUFFIX),
        tags: format!("{},{}", SHARE_TAG, book.tags),
        content: compose_content(book),
    }
}

fn compose_content(book: &BookRecord) -> String {
    let mut content = String::new();
    content.push_str(format!("## {}\n\n", book.title).as_str());
    content.push_str(format!("![{}]({})\n\n",
                             sanitize_alt_text(book.title.as_str()), book.img_url).as_str());
    content.push_str(format!("### 作者\n\n{}\n\n", bullets(&book.author)).as_str());
    content.push_str(format!("{}\n\n", book.author_intro).as_str());
    if !book.translator.is_empty() {
        content.push_str(format!("### 译者\n\n{}\n\n", bullets(&book.translator)).as_str());
    }
    content.push_str(format!("### 内容简介\n\n{}\n\n", book.summary).as_str());
    content.push_str(format!("### 目录\n\n{}\n\n", book.catalog).as_str());
    content.push_str("### 其他\n\n");
    content.push_str(format!("* 出版社：{}\n", book.publisher).as_str());
    if !book.series.trim().is_empty() {
        content.push_str(format!("* 丛　书：{}\n", book.series).as_str());
    }
    content.push_str(format!("* 副标题：{}\n", book.sub_title).as_str());
    content.push_str(format!("* 原作名：{}\n", book.original_title).as_str());
    content.push_str(format!("* 出版年：{}\n", book.publish_date).as_str());
    content.push_str(format!("* 总页数：{}\n", book.pages).as_str());
    content.push_str(format!("* 定　价：{}\n", book.price).as_str());
    content.push_str(format!("* 装　帧：{}\n", book.binding).as_str());
    content.push_str(format!("* ISBN：{}\n\n", book.isbn13).as_str());
    content.push_str("----\n\n");
    content.push_str(FOOTER);
    content.push_str("\n\n");
    content
}

fn bullets(names: &[String]) -> String {
    names.iter().map(|name| format!("* {}\n", name)).collect()
}

// Square brackets in the title would terminate the Markdown image alt text
// early; they are stripped here and only here. The heading and the image URL
// keep the title untouched.
fn sanitize_alt_text(title: &str) -> String {
    title.replace('[', "").replace(']', "")
}
