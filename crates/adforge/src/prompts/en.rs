use super::PromptTable;

pub(super) static TABLE: PromptTable = PromptTable {
    association_both_descriptions: "\
Tell me if there is a direct or indirect relationship between '{term}', whose description is '{term_description}',
and '{associative_term}' whose description is '{associative_term_description}'.
",
    association_term_description: "\
Tell me if there is a direct or indirect relationship between '{term}', whose description is '{term_description}',
and '{associative_term}'.
",
    association_associative_description: "\
Tell me if there is a direct or indirect relationship between '{term}' and '{associative_term}',
whose description is '{associative_term_description}'.
",
    association_without_descriptions: "\
Tell me if there is a direct or indirect relationship between '{term}' and '{associative_term}'.
",
    association_instructions: "
Find if there is any way to associate the terms, even if it is not a very direct relationship.

Response must be in JSON format, following this example:
{\"term\": \"{term}\", \"associative_term\": \"{associative_term}\", \"relationship\": true/false, \"reason\": \"reason why there is or isn't relationship between {term} and {associative_term}\"}
",

    generation_without_relationship: "\
Generate {n} text ads of less than {length} characters for Google Ads.
The ad must be related to the terms '{term}' and '{associative_term}'.
The text ad must encourage potential customers to buy '{term}' because '{associative_term}' is trending.

The response should be in the following format:
[\"text 1 here\", \"text 2 here\", ..., \"text {n} here\"]
The response should be exactly in the provided format, without including line breaks or unnecessary spaces.
It should only be a list of text ads separated by commas and between brackets.
",
    generation_related_without_descriptions: "\
Generate {n} text ads of less than {length} characters for Google Ads.
The ad must be related to the terms '{term}' and '{associative_term}'.
The text ad must encourage potential customers to buy '{term}' because '{associative_term}' is trending.
Consider the following association reason between both terms to create the ad: '{association_reason}'.
If the generated text ads are long, try to include the retailer name: '{company}'.

The response should be in the following format:
[\"text 1 here\", \"text 2 here\", ..., \"text {n} here\"]
The response should be exactly in the provided format, without including line breaks or unnecessary spaces.
It should only be a list of text ads separated by commas and between brackets.
",
    generation_related_term_description: "\
Generate {n} text ads of less than {length} characters for Google Ads.
The ad must be related to the terms '{term}' whose description is '{term_description}' and '{associative_term}'.
The text ad must encourage potential customers to buy '{term}' because '{associative_term}' is trending.
Consider the following association reason between both terms to create the ad: '{association_reason}'.
If the generated text ads are long, try to include the retailer name: '{company}'.

The response should be in the following format:
[\"text 1 here\", \"text 2 here\", ..., \"text {n} here\"]
The response should be exactly in the provided format, without including line breaks or unnecessary spaces.
It should only be a list of text ads separated by commas and between brackets.
",
    generation_related_associative_description: "\
Generate {n} text ads of less than {length} characters for Google Ads.
The ad must be related to the terms '{term}' and '{associative_term}' whose description is '{associative_term_description}'.
The text ad must encourage potential customers to buy '{term}' because '{associative_term}' is trending.
Consider the following association reason between both terms to create the ad: '{association_reason}'.
If the generated text ads are long, try to include the retailer name: '{company}'.

The response should be in the following format:
[\"text 1 here\", \"text 2 here\", ..., \"text {n} here\"]
The response should be exactly in the provided format, without including line breaks or unnecessary spaces.
It should only be a list of text ads separated by commas and between brackets.
",
    generation_related_both_descriptions: "\
Generate {n} text ads of less than {length} characters for Google Ads.
The ad must be related to the terms '{term}' whose description is '{term_description}' and '{associative_term}' whose description is '{associative_term_description}'.
The text ad must encourage potential customers to buy '{term}' because '{associative_term}' is trending.
Consider the following association reason between both terms to create the ad: '{association_reason}'.
If the generated text ads are long, try to include the retailer name: '{company}'.

The response should be in the following format:
[\"text 1 here\", \"text 2 here\", ..., \"text {n} here\"]
The response should be exactly in the provided format, without including line breaks or unnecessary spaces.
It should only be a list of text ads separated by commas and between brackets.
",
    generation_single_with_description: "\
Generate {n} text ads of less than {length} characters for Google Ads.
The ad has to be related to the term '{term}' whose description is '{term_description}'.
It is from a retailer called {company} and must encourage potential customers in {location} to buy '{term}'.
If the generated text ads are long, try to include the retailer name: '{company}'.

The response should be in the following format:
[\"text 1 here\", \"text 2 here\", ..., \"text {n} here\"]
The response should be exactly in the provided format, without including line breaks or unnecessary spaces.
It should only be a list of text ads separated by commas and between brackets.
",
    generation_single_without_description: "\
Generate {n} text ads of less than {length} characters for Google Ads.
The ad has to be related to the term '{term}'.
It is from a retailer called {company} and must encourage potential customers in {location} to buy '{term}'.
If the generated text ads are long, try to include the retailer name: '{company}'.

The response should be in the following format:
[\"text 1 here\", \"text 2 here\", ..., \"text {n} here\"]
The response should be exactly in the provided format, without including line breaks or unnecessary spaces.
It should only be a list of text ads separated by commas and between brackets.
",

    paths_with_description: "\
You will be provided with a term and its description, and you should generate a url path split into {n} parts for that term.
The path should refer to the term '{term}' and its description '{term_description}'.
Each part of the path should be extremely short, just one word that encompasses the main idea of '{term}'
and that takes into account the description '{term_description}'.

For example, if the term is 'cell phones' and its description is 'Samsung Galaxy S23, Samsung Galaxy S23 Plus, Samsung Galaxy S23 Ultra',
then part 1 of the path can be 'cell-phones' and part 2 of the path can be 'galaxy-s23'.
This path will be used in the url of an ecommerce site: www.ecommerce.com/cell-phones/galaxy-s23
The first part of the path should be a category and the second part something more granular referring to the product.
IMPORTANT: It should NOT contain capital letters or spaces, if there are several words they should be in lowercase and separated by a hyphen.

The response should be in the following format:
[\"path part 1 here\", \"path part 2 here\", ..., \"path part {n} here\"]
The response should be exactly in the provided format, without including line breaks or unnecessary spaces.
",
    paths_without_description: "\
You will be provided with a term, and you should generate a url path split into {n} parts for that term.
The path should refer to the term '{term}'.
Each part of the path should be extremely short, just one word that encompasses the main idea of '{term}'.

For example, if the term is 'cell phones', part 1 of the path can be 'cell-phones' and part 2 of the path can be 'smartphones'.
This path will be used in the url of an ecommerce site: www.ecommerce.com/cell-phones/smartphones
The first part of the path should be a category and the second part something more granular referring to the product.
IMPORTANT: It should NOT contain capital letters or spaces, if there are several words they should be in lowercase and separated by a hyphen.

The response should be in the following format:
[\"path part 1 here\", \"path part 2 here\", ..., \"path part {n} here\"]
The response should be exactly in the provided format, without including line breaks or unnecessary spaces.
",

    size_enforcement: "\
Make the following text ad shorter, it has to be shorter than {max_length} characters.
The text ad is: {copy}

The response should be in the following format:
shortened_text
The response should be just the shortened text without quotation marks, line breaks or anything else.
",
    path_size_enforcement: "\
I will give you a list of display path texts for Google Ads that may be too long. Each element is called a part,
and the list may have one part or be empty (which are valid cases).
Make the part shorter if the part is greater than {max_length} characters, and check all parts.
If a part does not need shortening, keep the same part on the list.
The text is: {copy}
Give me the result in the same format as the text:
[\"write part 1 of the path here\", \"write part 2 of the path here\"]
IMPORTANT: It should NOT contain capital letters or spaces, if there are several words they should
be in lowercase and separated by a hyphen.
",
    feature_extraction: "\
Given the following product description:
'{description}'
Generate a short list of the main features. The result should be in the following format:
\"Feature 1\", \"Feature 2\", ..., \"Feature N\"
",
    keywords: "\
Given the term '{term}', give me a list of up to 10 keywords for Google Ads that are related to the provided term.
The response should be in the following format:
[\"Keyword 1\", \"Keyword 2\", ..., \"Keyword N\"]
The response should be exactly in the provided format without adding unnecessary line breaks or spaces.
",
};
